//! Browser side of `AssetSource`: images through `HtmlImageElement`, the
//! typeface and glTF binaries through `XMLHttpRequest`.
//!
//! Completion callbacks go through `crate::deliver`, which borrows the
//! runner; they never run synchronously inside `fetch`.
//!
//! Decoded images and model bytes live in an `AssetStore` shared with the
//! canvas renderer, which hands them to the draw callback. JS never has to
//! call back into the runner to find them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Map, Uint8Array};
use solar_tour::assets::glb;
use solar_tour::assets::loader::Model;
use solar_tour::{
    AssetError, AssetOutcome, AssetPayload, AssetRequest, AssetSource, AssetTicket, MeshInstance,
    ModelHandle, MountId, Texture, TextureHandle, TourConfig, Typeface,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, XmlHttpRequest, XmlHttpRequestResponseType};

/// The element doing the fetch plus its completion callbacks. Dropping it
/// after detaching the callbacks abandons the request.
enum InFlight {
    Image {
        image: HtmlImageElement,
        _on_load: Closure<dyn FnMut()>,
        _on_error: Closure<dyn FnMut()>,
    },
    Request {
        xhr: XmlHttpRequest,
        _on_load: Closure<dyn FnMut()>,
        _on_error: Closure<dyn FnMut()>,
    },
}

impl InFlight {
    fn abandon(&self) {
        match self {
            InFlight::Image { image, .. } => {
                image.set_onload(None);
                image.set_onerror(None);
            }
            InFlight::Request { xhr, .. } => {
                xhr.set_onload(None);
                xhr.set_onerror(None);
                if let Err(err) = xhr.abort() {
                    log::debug!("xhr abort failed: {err:?}");
                }
            }
        }
    }
}

/// Loaded resources by handle, tagged with the mount that owns them.
#[derive(Default)]
pub struct AssetStore {
    textures: HashMap<u32, (MountId, HtmlImageElement)>,
    models: HashMap<u32, (MountId, Uint8Array)>,
}

impl AssetStore {
    /// Images and model bytes used by `instances`, as
    /// `{ textures: Map<handle, HTMLImageElement>, models: Map<handle, Uint8Array> }`.
    pub fn resources_for(&self, instances: &[MeshInstance]) -> Result<JsValue, JsValue> {
        let textures = Map::new();
        let models = Map::new();
        for instance in instances {
            if let Some(TextureHandle(h)) = instance.texture_handle() {
                if let Some((_, image)) = self.textures.get(&h) {
                    textures.set(&JsValue::from(h), image);
                }
            }
            if let Some(ModelHandle(h)) = instance.model_handle() {
                if let Some((_, bytes)) = self.models.get(&h) {
                    models.set(&JsValue::from(h), bytes);
                }
            }
        }
        let resources = js_sys::Object::new();
        js_sys::Reflect::set(&resources, &JsValue::from_str("textures"), &textures)?;
        js_sys::Reflect::set(&resources, &JsValue::from_str("models"), &models)?;
        Ok(resources.into())
    }

    fn release(&mut self, mount: MountId) {
        self.textures.retain(|_, (owner, _)| *owner != mount);
        self.models.retain(|_, (owner, _)| *owner != mount);
    }
}

pub struct WebAssets {
    tour: TourConfig,
    in_flight: HashMap<AssetTicket, InFlight>,
    /// Completed requests. Their callbacks may still be on the stack, so
    /// they are dropped on the next `fetch` or `release`.
    finished: Vec<InFlight>,
    store: Rc<RefCell<AssetStore>>,
    next_handle: u32,
}

impl WebAssets {
    pub fn new(tour: &TourConfig) -> Self {
        Self {
            tour: tour.clone(),
            in_flight: HashMap::new(),
            finished: Vec::new(),
            store: Rc::new(RefCell::new(AssetStore::default())),
            next_handle: 0,
        }
    }

    /// The store the renderer reads from.
    pub fn store(&self) -> Rc<RefCell<AssetStore>> {
        Rc::clone(&self.store)
    }

    fn next_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }

    /// Turn a finished request into an outcome. Called from the load
    /// callbacks, after which the request is no longer in flight.
    pub fn complete(&mut self, ticket: AssetTicket, loaded: Loaded) -> AssetOutcome {
        if let Some(done) = self.in_flight.remove(&ticket) {
            self.finished.push(done);
        }
        match loaded {
            Loaded::Image(image) => {
                let handle = self.next_handle();
                let texture = Texture {
                    handle: TextureHandle(handle),
                    width: image.natural_width(),
                    height: image.natural_height(),
                };
                self.store
                    .borrow_mut()
                    .textures
                    .insert(handle, (ticket.mount, image));
                Ok(AssetPayload::Texture(texture))
            }
            Loaded::Text { path, text } => Typeface::from_json(&text)
                .map(AssetPayload::Font)
                .map_err(|source| AssetError::Typeface { path, source }),
            Loaded::Bytes { path, bytes } => {
                let info = glb::parse(&bytes).map_err(|source| AssetError::Model {
                    path: path.clone(),
                    source,
                })?;
                let handle = self.next_handle();
                let array = Uint8Array::from(bytes.as_slice());
                self.store
                    .borrow_mut()
                    .models
                    .insert(handle, (ticket.mount, array));
                Ok(AssetPayload::Model(Model {
                    handle: ModelHandle(handle),
                    info,
                }))
            }
            Loaded::Failed { path, reason } => Err(AssetError::Fetch { path, reason }),
        }
    }

    fn fetch_image(&mut self, ticket: AssetTicket, url: String) -> Result<InFlight, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_cross_origin(Some("anonymous"));

        let loaded = image.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || {
            crate::deliver(ticket, Loaded::Image(loaded.clone()));
        });
        let path = url.clone();
        let on_error = Closure::<dyn FnMut()>::new(move || {
            crate::deliver(ticket, Loaded::failed(&path, "image failed to load"));
        });
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(&url);

        Ok(InFlight::Image {
            image,
            _on_load: on_load,
            _on_error: on_error,
        })
    }

    fn fetch_request(
        &mut self,
        ticket: AssetTicket,
        url: String,
        binary: bool,
    ) -> Result<InFlight, JsValue> {
        let xhr = XmlHttpRequest::new()?;
        xhr.open_with_async("GET", &url, true)?;
        xhr.set_response_type(if binary {
            XmlHttpRequestResponseType::Arraybuffer
        } else {
            XmlHttpRequestResponseType::Text
        });

        let request = xhr.clone();
        let path = url.clone();
        let on_load = Closure::<dyn FnMut()>::new(move || {
            let loaded = read_response(&request, &path, binary);
            crate::deliver(ticket, loaded);
        });
        let path = url.clone();
        let on_error = Closure::<dyn FnMut()>::new(move || {
            crate::deliver(ticket, Loaded::failed(&path, "network error"));
        });
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        xhr.send()?;

        Ok(InFlight::Request {
            xhr,
            _on_load: on_load,
            _on_error: on_error,
        })
    }
}

/// Raw result of a browser fetch, before decoding.
pub enum Loaded {
    Image(HtmlImageElement),
    Text { path: String, text: String },
    Bytes { path: String, bytes: Vec<u8> },
    Failed { path: String, reason: String },
}

impl Loaded {
    fn failed(path: &str, reason: &str) -> Self {
        Loaded::Failed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn read_response(xhr: &XmlHttpRequest, path: &str, binary: bool) -> Loaded {
    let status = xhr.status().unwrap_or(0);
    if !(200..300).contains(&status) {
        return Loaded::failed(path, &format!("HTTP {status}"));
    }
    if binary {
        match xhr.response() {
            Ok(buffer) => Loaded::Bytes {
                path: path.to_string(),
                bytes: Uint8Array::new(&buffer).to_vec(),
            },
            Err(err) => Loaded::failed(path, &format!("{err:?}")),
        }
    } else {
        match xhr.response_text() {
            Ok(Some(text)) => Loaded::Text {
                path: path.to_string(),
                text,
            },
            Ok(None) => Loaded::failed(path, "empty response"),
            Err(err) => Loaded::failed(path, &format!("{err:?}")),
        }
    }
}

impl AssetSource for WebAssets {
    fn fetch(&mut self, ticket: AssetTicket, request: AssetRequest) {
        self.finished.clear();
        let url = self.tour.resolve_path(request.path());
        let started = match &request {
            AssetRequest::Texture { .. } => self.fetch_image(ticket, url.clone()),
            AssetRequest::Font { .. } => self.fetch_request(ticket, url.clone(), false),
            AssetRequest::Model { .. } => self.fetch_request(ticket, url.clone(), true),
        };
        match started {
            Ok(in_flight) => {
                self.in_flight.insert(ticket, in_flight);
            }
            Err(err) => {
                // still asynchronous: report the failure from a microtask
                let reason = format!("{err:?}");
                defer(move || {
                    crate::deliver(ticket, Loaded::failed(&url, &reason));
                });
            }
        }
    }

    fn release(&mut self, mount: MountId) {
        self.finished.clear();
        let abandoned: Vec<AssetTicket> = self
            .in_flight
            .keys()
            .filter(|t| t.mount == mount)
            .copied()
            .collect();
        for ticket in &abandoned {
            if let Some(in_flight) = self.in_flight.remove(ticket) {
                in_flight.abandon();
            }
        }
        self.store.borrow_mut().release(mount);
        log::debug!("released {mount:?} ({} requests abandoned)", abandoned.len());
    }
}

/// Run `f` on the next microtask.
fn defer(f: impl FnOnce() + 'static) {
    let callback = Closure::<dyn FnMut(JsValue)>::once(move |_: JsValue| f());
    let promise = js_sys::Promise::resolve(&JsValue::UNDEFINED);
    let _ = promise.then(&callback);
    callback.forget();
}
