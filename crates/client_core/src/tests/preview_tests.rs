use super::*;
use std::io::Write as _;

fn image_fixture(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("event-cover-")
        .suffix(suffix)
        .tempfile()
        .expect("tempfile");
    file.write_all(bytes).expect("write fixture");
    file
}

#[test]
fn guesses_name_and_mime_from_path() {
    let selection = ImageSelection::from_path("/tmp/covers/summit.PNG");
    assert_eq!(selection.file_name, "summit.PNG");
    assert_eq!(selection.mime_type, "image/png");
    assert!(selection.is_image_mime());

    let unknown = ImageSelection::from_path("/tmp/covers/summit.unknownext");
    assert_eq!(unknown.mime_type, "application/octet-stream");
    assert!(!unknown.is_image_mime());
}

#[test]
fn data_url_round_trips_mime_and_bytes() {
    let url = encode_data_url("image/gif", b"GIF89a");
    assert_eq!(url, "data:image/gif;base64,R0lGODlh");

    let (mime, bytes) = decode_data_url(&url).expect("decode");
    assert_eq!(mime, "image/gif");
    assert_eq!(bytes, b"GIF89a");
}

#[test]
fn rejects_non_base64_data_urls() {
    assert!(matches!(
        decode_data_url("https://example.com/cover.png"),
        Err(PreviewError::NotDataUrl)
    ));
    assert!(matches!(
        decode_data_url("data:text/plain,hello"),
        Err(PreviewError::NotDataUrl)
    ));
    assert!(matches!(
        decode_data_url("data:image/png;base64,@@@"),
        Err(PreviewError::Base64(_))
    ));
}

#[tokio::test]
async fn load_preview_encodes_selected_file() {
    let fixture = image_fixture(".jpg", &[0xFF, 0xD8, 0xFF, 0xE0]);
    let selection = ImageSelection::from_path(fixture.path());

    let preview = load_preview(&selection).await.expect("preview");
    assert!(preview.starts_with("data:image/jpeg;base64,"));
    let (_, bytes) = decode_data_url(&preview).expect("decode");
    assert_eq!(bytes, [0xFF, 0xD8, 0xFF, 0xE0]);
}

#[tokio::test]
async fn missing_file_surfaces_read_errors() {
    let selection = ImageSelection::from_path("/definitely/not/here/cover.png");

    let err = load_preview(&selection).await.expect_err("preview");
    assert!(matches!(err, PreviewError::ReadFile { .. }));

    let err = selection.read().await.expect_err("read");
    assert!(matches!(err, SubmitError::ReadImage { .. }));
    assert!(err.user_message().contains("cover.png"));
}
