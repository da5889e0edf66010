use std::collections::HashMap;

use web_sys::HtmlImageElement;

use crate::error::{LevelError, Result};
use crate::geom::Vec2;

// Headless images carry only their dimensions.
#[derive(Clone, Debug)]
pub struct Image {
    name: String,
    width: f64,
    height: f64,
    element: Option<HtmlImageElement>,
}

impl Image {
    pub fn headless(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            element: None,
        }
    }

    pub fn from_element(name: impl Into<String>, element: HtmlImageElement) -> Self {
        Self {
            name: name.into(),
            width: element.natural_width().max(1) as f64,
            height: element.natural_height().max(1) as f64,
            element: Some(element),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn element(&self) -> Option<&HtmlImageElement> {
        self.element.as_ref()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Assets {
    images: HashMap<String, Image>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: Image) {
        self.images.insert(image.name.clone(), image);
    }

    pub fn get(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }

    pub fn image(&self, name: &str) -> Result<&Image> {
        self.get(name)
            .ok_or_else(|| LevelError::MissingAsset(name.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_image(url: &str) -> Result<Image> {
    use js_sys::{Function, Promise};
    use wasm_bindgen_futures::JsFuture;

    let dom_err = |err: wasm_bindgen::JsValue| LevelError::AssetLoad {
        url: url.to_string(),
        reason: crate::js_value_to_string(&err),
    };

    let element = HtmlImageElement::new().map_err(dom_err)?;
    let pending = element.clone();
    let src = url.to_string();
    let promise = Promise::new(&mut move |resolve: Function, reject: Function| {
        pending.set_onload(Some(&resolve));
        pending.set_onerror(Some(&reject));
        pending.set_src(&src);
    });

    JsFuture::from(promise)
        .await
        .map_err(|_| LevelError::AssetLoad {
            url: url.to_string(),
            reason: "image failed to decode".to_string(),
        })?;

    element.set_onload(None);
    element.set_onerror(None);
    log::debug!(
        "loaded {} ({}x{})",
        url,
        element.natural_width(),
        element.natural_height()
    );
    Ok(Image::from_element(url, element))
}
