use std::hint::black_box;
use bencher::{FormFixture, TestCase};
use bytes::BytesMut;
#[cfg(feature = "codspeed")]
use codspeed_criterion_compat::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
#[cfg(not(feature = "codspeed"))]
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_multipart::boundary::random_boundary;
use micro_multipart::codec::{MultipartEncoder, MultipartItem};
use micro_multipart::protocol::Entity;
use tokio_util::codec::Encoder;

static FIELDS_ONLY: FormFixture = FormFixture::new(16, 0, 0);
static SMALL_FILES: FormFixture = FormFixture::new(4, 4, 4 * 1024);
static LARGE_FILE: FormFixture = FormFixture::new(2, 1, 1024 * 1024);

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::small("fields_only", FIELDS_ONLY),
        TestCase::normal("small_files", SMALL_FILES),
        TestCase::large("large_file", LARGE_FILE),
    ]
}

fn benchmark_multipart_body(criterion: &mut Criterion) {
    for case in create_test_cases() {
        let mut group = criterion.benchmark_group(format!("multipart_body_{}", case.group().name()));
        group.sample_size(case.group().sample_size());
        group.throughput(Throughput::Bytes(case.form().payload_size() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            let form = case.form().build();
            b.iter(|| black_box(form.body()));
        });
        group.finish();
    }
}

fn benchmark_multipart_encoder(criterion: &mut Criterion) {
    for case in create_test_cases() {
        let mut group = criterion.benchmark_group(format!("multipart_encoder_{}", case.group().name()));
        group.sample_size(case.group().sample_size());
        group.throughput(Throughput::Bytes(case.form().payload_size() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            let form = case.form().build();
            b.iter_batched_ref(
                || (MultipartEncoder::new(form.boundary()), BytesMut::new()),
                |(encoder, bytes_mut)| {
                    for entity in form.entities() {
                        encoder.encode(MultipartItem::Entity(entity.as_ref()), bytes_mut).expect("encoding entity never fails");
                    }
                    encoder.encode(MultipartItem::Eof, bytes_mut).expect("encoding eof never fails");
                    black_box(bytes_mut.len());
                },
                BatchSize::SmallInput,
            );
        });
        group.finish();
    }
}

fn benchmark_boundary(criterion: &mut Criterion) {
    criterion.bench_function("random_boundary", |b| b.iter(|| black_box(random_boundary())));
}

fn benchmark_entity_write(criterion: &mut Criterion) {
    let form = SMALL_FILES.build();
    criterion.bench_function("entity_write", |b| {
        b.iter_batched_ref(
            BytesMut::new,
            |bytes_mut| {
                for entity in form.entities() {
                    entity.write(bytes_mut);
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(encoder, benchmark_multipart_body, benchmark_multipart_encoder, benchmark_boundary, benchmark_entity_write);
criterion_main!(encoder);
