use http::Request;
use micro_multipart::boundary::RandomBoundary;
use micro_multipart::protocol::{Multipart, Part, Subtype};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut attachments = Multipart::new(Subtype::Mixed);
    attachments.headers_mut().set_value("form-data", "Content-Disposition");
    attachments.headers_mut().set_attribute("name", "attachments", "Content-Disposition");
    attachments.append(Part::file("notes", "first line\nsecond line\n".as_bytes().to_vec(), Some("notes.txt"), Some("text/plain")));
    attachments.append(Part::file("logo", vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a], Some("logo.png"), None).with_mime(&mime::IMAGE_PNG));

    let mut form = Multipart::with_generator(Subtype::FormData, &RandomBoundary::default().with_length(24));
    form.append_field("user", "zava");
    form.append_field("comment", "hello multipart");
    form.append(attachments);

    println!("{form}");

    match form.into_request(Request::post("http://127.0.0.1:3000/upload")) {
        Ok(request) => {
            info!(headers = ?request.headers(), body_size = request.body().len(), "multipart request ready");
        }
        Err(e) => {
            error!(cause = %e, "build multipart request failed");
        }
    }
}
