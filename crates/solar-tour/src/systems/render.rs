use crate::components::mesh::Color;
use crate::core::scene::SceneHandle;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{DrawTiming, FrameData, LabelDraw, Renderer};

/// Label colour; the tour's labels are plain white.
const LABEL_COLOR: Color = Color::WHITE;

/// Rebuild the render buffer from the scene's meshes.
/// Meshes still waiting for their asset are skipped.
pub fn build_render_buffer(scene: &SceneHandle, buffer: &mut RenderBuffer) {
    buffer.clear();
    for mesh in scene.meshes() {
        buffer.push_mesh(mesh);
    }
}

/// Label geometries with their placement for this frame.
pub fn label_draws(scene: &SceneHandle) -> Vec<LabelDraw<'_>> {
    scene
        .labels()
        .map(|label| LabelDraw {
            model: label.transform.matrix(),
            geometry: &label.geometry,
            color: LABEL_COLOR,
        })
        .collect()
}

/// Assemble the frame and hand it to the renderer (tick step e).
pub fn draw_scene<R: Renderer + ?Sized>(
    scene: &SceneHandle,
    buffer: &mut RenderBuffer,
    renderer: &mut R,
) -> DrawTiming {
    build_render_buffer(scene, buffer);
    let labels = label_draws(scene);
    let frame = FrameData {
        camera: scene.camera.uniform(),
        light: &scene.light,
        instances: &buffer.instances,
        labels: &labels,
    };
    renderer.draw(&frame)
}
