use bytes::Bytes;
use micro_multipart::protocol::{Multipart, Subtype};

const FIXTURE_BOUNDARY: &str = "----MicroMultipartBench0123456789";

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    form: FormFixture,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, form: FormFixture) -> Self {
        Self { name, group, form }
    }

    pub fn small(name: &'static str, form: FormFixture) -> Self {
        Self::new(name, TestGroup::Small, form)
    }

    pub fn normal(name: &'static str, form: FormFixture) -> Self {
        Self::new(name, TestGroup::Normal, form)
    }

    pub fn large(name: &'static str, form: FormFixture) -> Self {
        Self::new(name, TestGroup::Large, form)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn form(&self) -> &FormFixture {
        &self.form
    }
}

/// Shape of a generated form: text fields plus file parts of a fixed size
#[derive(Debug, Copy, Clone)]
pub struct FormFixture {
    fields: usize,
    files: usize,
    file_size: usize,
}

impl FormFixture {
    pub const fn new(fields: usize, files: usize, file_size: usize) -> Self {
        Self { fields, files, file_size }
    }

    pub fn payload_size(&self) -> usize {
        self.files * self.file_size + self.fields * 16
    }

    /// Builds the form with a fixed boundary so every run encodes the same bytes.
    pub fn build(&self) -> Multipart {
        let mut form = Multipart::with_boundary(Subtype::FormData, FIXTURE_BOUNDARY);
        for index in 0..self.fields {
            form.append_field(&format!("field_{index}"), format!("value of {index:>7}"));
        }

        let file = Bytes::from(vec![b'x'; self.file_size]);
        for index in 0..self.files {
            let file_name = format!("file_{index}.bin");
            form.append_file(&format!("file_{index}"), file.clone(), Some(&file_name), Some("application/octet-stream"));
        }
        form
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

impl TestGroup {
    pub fn name(&self) -> &'static str {
        match self {
            TestGroup::Small => "small",
            TestGroup::Normal => "normal",
            TestGroup::Large => "large",
        }
    }

    /// Criterion sample size, large payloads get fewer samples
    pub fn sample_size(&self) -> usize {
        match self {
            TestGroup::Small => 100,
            TestGroup::Normal => 50,
            TestGroup::Large => 10,
        }
    }
}
