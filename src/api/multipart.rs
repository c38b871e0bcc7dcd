use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::BOUNDARY_TOKEN_LEN;

/// Hand-built `multipart/form-data` body with a random boundary token,
/// unique per call. Parts are appended in order; `finish` seals the
/// body with the closing boundary.
pub struct MultipartBody {
    boundary: String,
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(BOUNDARY_TOKEN_LEN)
            .map(char::from)
            .collect();

        MultipartBody {
            boundary: format!("Boundary-{}", token),
            buf: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn add_text(&mut self, name: &str, value: &str) {
        self.buf
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.buf.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.extend_from_slice(b"\r\n");
    }

    pub fn add_file(&mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) {
        self.buf
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.buf.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name, filename
            )
            .as_bytes(),
        );
        self.buf
            .extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        self.buf.extend_from_slice(bytes);
        self.buf.extend_from_slice(b"\r\n");
    }

    /// Appends the closing boundary and returns the finished body.
    pub fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.buf
    }
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal multipart parser: splits the body on the boundary and
    /// returns (headers, payload) per part.
    fn parse_parts(body: &[u8], boundary: &str) -> Vec<(String, Vec<u8>)> {
        let text = body.to_vec();
        let delim = format!("--{}", boundary);
        let mut parts = Vec::new();

        let raw = String::from_utf8_lossy(&text);
        for chunk in raw.split(delim.as_str()) {
            let chunk = chunk.trim_start_matches("\r\n");
            if chunk.is_empty() || chunk.starts_with("--") {
                continue;
            }
            if let Some(split) = chunk.find("\r\n\r\n") {
                let headers = chunk[..split].to_string();
                let payload = chunk[split + 4..]
                    .trim_end_matches("\r\n")
                    .as_bytes()
                    .to_vec();
                parts.push((headers, payload));
            }
        }

        parts
    }

    #[test]
    fn test_boundary_unique_per_body() {
        let a = MultipartBody::new();
        let b = MultipartBody::new();
        assert_ne!(a.boundary(), b.boundary());
    }

    #[test]
    fn test_content_type_carries_boundary() {
        let body = MultipartBody::new();
        assert_eq!(
            body.content_type(),
            format!("multipart/form-data; boundary={}", body.boundary())
        );
    }

    #[test]
    fn test_round_trip_text_and_file_fields() {
        let mut body = MultipartBody::new();
        body.add_text("caption", "hello");
        body.add_file("image", "upload.jpg", "image/jpeg", b"fake jpeg bytes");
        let boundary = body.boundary().to_string();
        let bytes = body.finish();

        let parts = parse_parts(&bytes, &boundary);
        assert_eq!(parts.len(), 2);

        assert!(parts[0].0.contains("name=\"caption\""));
        assert_eq!(parts[0].1, b"hello");

        assert!(parts[1].0.contains("name=\"image\""));
        assert!(parts[1].0.contains("filename=\"upload.jpg\""));
        assert!(parts[1].0.contains("Content-Type: image/jpeg"));
        assert_eq!(parts[1].1, b"fake jpeg bytes");
    }

    #[test]
    fn test_empty_caption_field_survives() {
        let mut body = MultipartBody::new();
        body.add_text("caption", "");
        let boundary = body.boundary().to_string();
        let bytes = body.finish();

        let parts = parse_parts(&bytes, &boundary);
        assert_eq!(parts.len(), 1);
        assert!(parts[0].1.is_empty());
    }

    #[test]
    fn test_body_ends_with_closing_boundary() {
        let mut body = MultipartBody::new();
        body.add_text("caption", "x");
        let boundary = body.boundary().to_string();
        let bytes = body.finish();

        let tail = format!("--{}--\r\n", boundary);
        assert!(bytes.ends_with(tail.as_bytes()));
    }
}
