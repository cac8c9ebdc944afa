//! Asynchronous asset requests and their results.
//!
//! A mounted scene asks the host for textures, the label typeface and the
//! intro model. Each request carries an `AssetTicket` naming the mount and
//! the slot the result belongs to. Results come back through
//! `Stage::resolve`; a ticket whose mount is gone is dropped there, which
//! is how a late load is kept away from a disposed scene.

use crate::api::types::{ModelHandle, MountId, TextureHandle};
use crate::assets::glb::GlbInfo;
use crate::assets::typeface::Typeface;
use crate::bodies::{BodyConfig, PrimaryShape};
use crate::config::TourConfig;
use crate::error::AssetError;

/// Which part of the scene an asset is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// Texture of the primary sphere.
    Surface,
    /// Texture of the ring.
    Ring,
    /// Texture of the moon at this index.
    MoonSurface(usize),
    /// Typeface for the labels.
    Font,
    /// glTF model of the intro scene.
    Model,
}

/// Routing information attached to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetTicket {
    pub mount: MountId,
    pub key: AssetKey,
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRequest {
    Texture { path: String },
    Font { path: String },
    Model { path: String },
}

impl AssetRequest {
    pub fn path(&self) -> &str {
        match self {
            AssetRequest::Texture { path }
            | AssetRequest::Font { path }
            | AssetRequest::Model { path } => path,
        }
    }
}

/// A decoded image living on the host side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Texture {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// A validated glTF binary living on the host side.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub handle: ModelHandle,
    pub info: GlbInfo,
}

/// Successful result of an asset request.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetPayload {
    Texture(Texture),
    Font(Typeface),
    Model(Model),
}

pub type AssetOutcome = Result<AssetPayload, AssetError>;

/// Host service that performs the fetches.
///
/// `fetch` must not complete synchronously; the result is delivered later
/// through `Stage::resolve` with the same ticket. There are no retries.
pub trait AssetSource {
    fn fetch(&mut self, ticket: AssetTicket, request: AssetRequest);

    /// Abort outstanding requests of `mount` and free everything it loaded.
    /// Anything still in flight may be delivered afterwards; the stage
    /// ignores it.
    fn release(&mut self, mount: MountId);
}

/// Every request a body needs, in the order they should be issued.
pub fn requests_for(body: &BodyConfig, tour: &TourConfig) -> Vec<(AssetKey, AssetRequest)> {
    let mut requests = Vec::new();

    match &body.shape {
        PrimaryShape::Model { path, .. } => requests.push((
            AssetKey::Model,
            AssetRequest::Model {
                path: tour.resolve_path(path),
            },
        )),
        PrimaryShape::Sphere { .. } => {
            if let Some(surface) = &body.surface {
                requests.push((
                    AssetKey::Surface,
                    AssetRequest::Texture {
                        path: tour.resolve_path(surface),
                    },
                ));
            }
        }
    }

    if let Some(ring) = &body.ring {
        requests.push((
            AssetKey::Ring,
            AssetRequest::Texture {
                path: tour.resolve_path(&ring.texture),
            },
        ));
    }

    for (i, moon) in body.moons.iter().enumerate() {
        requests.push((
            AssetKey::MoonSurface(i),
            AssetRequest::Texture {
                path: tour.resolve_path(&moon.texture),
            },
        ));
    }

    let wants_font = body.label.is_some() || body.moons.iter().any(|m| m.label.is_some());
    if wants_font {
        requests.push((
            AssetKey::Font,
            AssetRequest::Font {
                path: tour.resolve_path(&tour.font_path),
            },
        ));
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyId;

    fn keys(id: BodyId) -> Vec<AssetKey> {
        requests_for(BodyConfig::for_body(id), &TourConfig::default())
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    #[test]
    fn earth_requests_surface_moon_and_font() {
        assert_eq!(
            keys(BodyId::Earth),
            vec![AssetKey::Surface, AssetKey::MoonSurface(0), AssetKey::Font]
        );
    }

    #[test]
    fn saturn_requests_ring_texture() {
        assert_eq!(keys(BodyId::Saturn), vec![AssetKey::Surface, AssetKey::Ring, AssetKey::Font]);
    }

    #[test]
    fn mars_requests_both_moons() {
        let keys = keys(BodyId::Mars);
        assert!(keys.contains(&AssetKey::MoonSurface(0)));
        assert!(keys.contains(&AssetKey::MoonSurface(1)));
    }

    #[test]
    fn intro_requests_only_the_model() {
        let requests = requests_for(BodyConfig::for_body(BodyId::Intro), &TourConfig::default());
        assert_eq!(requests.len(), 1);
        assert!(matches!(&requests[0], (AssetKey::Model, AssetRequest::Model { .. })));
    }

    #[test]
    fn paths_are_resolved_against_asset_root() {
        let tour = TourConfig {
            asset_root: "/static".to_string(),
            ..TourConfig::default()
        };
        let requests = requests_for(BodyConfig::for_body(BodyId::Sun), &tour);
        assert_eq!(requests[0].1.path(), "/static/sunmap.jpg");
        // the font is an absolute URL and stays untouched
        assert!(requests.last().unwrap().1.path().starts_with("https://"));
    }
}
