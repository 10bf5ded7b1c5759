use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CloudError {
    #[error(
        "invalid rectangle size: {reason} (width: {width}, height: {height})",
        reason = invalid_dimensions(.width, .height)
    )]
    InvalidSize { width: i32, height: i32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("no free spot for a {width}x{height} rectangle after {attempts} spiral points")]
    SpiralExhausted {
        attempts: u64,
        width: i32,
        height: i32,
    },
    #[error("Nothing to lay out")]
    Empty,
}

fn invalid_dimensions(width: &i32, height: &i32) -> &'static str {
    match (*width <= 0, *height <= 0) {
        (true, true) => "width and height must be greater than zero",
        (true, false) => "width must be greater than zero",
        _ => "height must be greater than zero",
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_names_the_bad_dimension() {
        let msg = CloudError::InvalidSize {
            width: 0,
            height: 10,
        }
        .to_string();
        assert!(msg.contains("width must be"), "{msg}");
        assert!(msg.contains("width: 0"));
        assert!(msg.contains("height: 10"));

        let msg = CloudError::InvalidSize {
            width: 10,
            height: -3,
        }
        .to_string();
        assert!(msg.contains("height must be"), "{msg}");
        assert!(msg.contains("height: -3"));

        let msg = CloudError::InvalidSize {
            width: -1,
            height: 0,
        }
        .to_string();
        assert!(msg.contains("width and height must be"), "{msg}");
    }
}
