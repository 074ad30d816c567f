//! Image decoding and pixel readback.
//!
//! Both operations load the image through an off-document
//! `HtmlImageElement` and await its `load`/`error` events. Brightness
//! sampling then draws the image onto an offscreen canvas and reads the RGBA
//! buffer back; a cross-origin image taints the canvas and the readback is
//! refused, which surfaces as [`ImageError::Readback`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use studio::brightness::Brightness;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("browser document is unavailable")]
    NoDocument,
    #[error("2d canvas context is unavailable")]
    NoContext,
    #[error("image failed to load: {0}")]
    Decode(String),
    #[error("pixel readback was refused")]
    Readback,
    #[error("image has no pixels")]
    Empty,
    #[error("image decoding needs a browser")]
    Unavailable,
}

/// Natural pixel dimensions of the image at `url`.
///
/// # Errors
///
/// [`ImageError::Decode`] when the image fails to load.
pub async fn natural_size(url: &str) -> Result<(u32, u32), ImageError> {
    #[cfg(feature = "csr")]
    {
        let image = load(url, false).await?;
        Ok((image.natural_width(), image.natural_height()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ImageError::Unavailable)
    }
}

/// Average brightness of the image at `url`.
///
/// # Errors
///
/// Load failure, a missing canvas context, or a refused readback. Callers
/// fall back to [`Brightness::NEUTRAL`].
pub async fn sample_brightness(url: &str) -> Result<Brightness, ImageError> {
    #[cfg(feature = "csr")]
    {
        let image = load(url, true).await?;
        let rgba = read_rgba(&image)?;
        Brightness::from_rgba(&rgba).ok_or(ImageError::Empty)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ImageError::Unavailable)
    }
}

/// Load and error callbacks attached to an image. Dropping detaches them
/// so no handler outlives the wait.
#[cfg(feature = "csr")]
struct LoadHandlers {
    image: web_sys::HtmlImageElement,
    _onload: wasm_bindgen::closure::Closure<dyn FnMut()>,
    _onerror: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(feature = "csr")]
impl Drop for LoadHandlers {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

#[cfg(feature = "csr")]
async fn load(url: &str, anonymous: bool) -> Result<web_sys::HtmlImageElement, ImageError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let image = web_sys::HtmlImageElement::new().map_err(|_| ImageError::NoDocument)?;
    if anonymous {
        image.set_cross_origin(Some("anonymous"));
    }
    let mut handlers = None;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::<dyn FnMut()>::once(move || {
            if let Err(err) = resolve.call0(&JsValue::NULL) {
                leptos::logging::warn!("image load resolve failed: {err:?}");
            }
        });
        let onerror = Closure::<dyn FnMut()>::once(move || {
            if let Err(err) = reject.call0(&JsValue::NULL) {
                leptos::logging::warn!("image load reject failed: {err:?}");
            }
        });
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        handlers = Some(LoadHandlers { image: image.clone(), _onload: onload, _onerror: onerror });
    });
    image.set_src(url);
    let settled = wasm_bindgen_futures::JsFuture::from(promise).await;
    drop(handlers);
    settled.map_err(|_| ImageError::Decode(url.to_owned()))?;
    Ok(image)
}

#[cfg(feature = "csr")]
fn read_rgba(image: &web_sys::HtmlImageElement) -> Result<Vec<u8>, ImageError> {
    use wasm_bindgen::JsCast;

    let width = image.natural_width();
    let height = image.natural_height();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty);
    }
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ImageError::NoDocument)?;
    let canvas = document
        .create_element("canvas")
        .map_err(|_| ImageError::NoDocument)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| ImageError::NoDocument)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .map_err(|_| ImageError::NoContext)?
        .ok_or(ImageError::NoContext)?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| ImageError::NoContext)?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
        .map_err(|_| ImageError::Readback)?;
    let data = ctx
        .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
        .map_err(|_| ImageError::Readback)?;
    Ok(data.data().0)
}
