use crate::canvas::CanvasSurface;
use crate::constants::PARTICLE_OVERRIDE_KEYS;
use crate::core::{DeviceProfile, ParticleConfig, ParticleField, PointerTracker};
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::FrameLoop;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A running particle field. Dropping it cancels the frame loop, clears the
/// canvas and removes its listeners; the particles go with it.
pub struct ParticleLayer {
    frames: FrameLoop,
    field: Rc<RefCell<ParticleField>>,
    surface: Rc<RefCell<CanvasSurface>>,
    _resize: EventListener,
    _pointer: EventListener,
}

impl ParticleLayer {
    pub fn mount(canvas: &web::HtmlCanvasElement, config: ParticleConfig) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_err)?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        dom::set_style(canvas, "pointer-events", "none");

        let size = dom::sync_canvas_to_viewport(canvas)
            .unwrap_or_else(|| Vec2::new(canvas.width() as f32, canvas.height() as f32));
        let field = Rc::new(RefCell::new(ParticleField::new(
            size,
            config,
            &mut StdRng::from_entropy(),
        )));
        let tracker = Rc::new(RefCell::new(PointerTracker::new()));

        let resize = events::wire_viewport_resize(canvas.clone(), field.clone())?;
        let pointer = events::wire_pointer_tracking(tracker.clone())?;

        let surface = Rc::new(RefCell::new(CanvasSurface::new(ctx)));
        let frames = {
            let (field, surface) = (field.clone(), surface.clone());
            FrameLoop::new(move |_| {
                let input = tracker.borrow_mut().take_frame();
                field
                    .borrow_mut()
                    .frame(&input, &mut *surface.borrow_mut());
                true
            })
        };
        frames.start();
        log::info!("[particles] mounted {}x{}", size.x, size.y);
        Ok(Self {
            frames,
            field,
            surface,
            _resize: resize,
            _pointer: pointer,
        })
    }
}

impl Drop for ParticleLayer {
    fn drop(&mut self) {
        self.frames.stop();
        // The last frame would otherwise stay frozen on the canvas.
        let (field, surface) = (self.field.try_borrow(), self.surface.try_borrow_mut());
        if let (Ok(field), Ok(mut surface)) = (field, surface) {
            field.erase(&mut *surface);
        }
        log::info!("[particles] unmounted");
    }
}

/// Mounts and unmounts the field as the device profile or the host page's
/// wishes change.
pub struct ParticleController {
    canvas: web::HtmlCanvasElement,
    config: ParticleConfig,
    profile: DeviceProfile,
    enabled: bool,
    layer: Option<ParticleLayer>,
}

impl ParticleController {
    pub fn new(canvas: web::HtmlCanvasElement, profile: DeviceProfile) -> Self {
        let overrides = dom::data_overrides(&canvas, &PARTICLE_OVERRIDE_KEYS);
        let (config, errors) = ParticleConfig::default()
            .with_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str())));
        for e in errors {
            log::warn!("[particles] ignoring override: {}", e);
        }
        let mut controller = Self {
            canvas,
            config,
            profile,
            enabled: true,
            layer: None,
        };
        controller.sync();
        controller
    }

    pub fn set_profile(&mut self, profile: DeviceProfile) {
        self.profile = profile;
        self.sync();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.sync();
    }

    fn sync(&mut self) {
        let want = self.enabled && self.profile.should_render_particles();
        match (want, self.layer.is_some()) {
            (true, false) => match ParticleLayer::mount(&self.canvas, self.config.clone()) {
                Ok(layer) => self.layer = Some(layer),
                Err(e) => log::warn!("[particles] disabled: {:?}", e),
            },
            (false, true) => self.layer = None,
            _ => {}
        }
    }
}
