use super::*;

#[test]
fn errors_read_as_sentences() {
    assert_eq!(ImageError::Decode("/works/a.jpg".into()).to_string(), "image failed to load: /works/a.jpg");
    assert_eq!(ImageError::Readback.to_string(), "pixel readback was refused");
}

#[cfg(not(feature = "csr"))]
mod native {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn decoding_is_unavailable_natively() {
        assert_eq!(block_on(natural_size("/works/a.jpg")), Err(ImageError::Unavailable));
        assert_eq!(block_on(sample_brightness("/cafe.jpg")), Err(ImageError::Unavailable));
    }
}
