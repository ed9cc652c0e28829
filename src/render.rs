use graphics::character::CharacterCache;
use graphics::{Context, Graphics, Transformed};
use opengl_graphics::GlyphCache;

use solar_orbit::view::{self, Projection};
use solar_orbit::{Body, Planet, Simulation};

const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const LABEL_SIZE: u32 = 16;
const TRAIL_WIDTH: f64 = 1.0;

/// Window-side state: where bodies land on screen and the font for labels.
/// Owned by the host loop and handed to every draw call.
pub struct Scene<'a> {
    pub projection: Projection,
    pub glyphs: Option<GlyphCache<'a>>,
}

impl<'a> Scene<'a> {
    pub fn draw<G>(&mut self, sim: &Simulation, c: &Context, g: &mut G)
    where
        G: Graphics<Texture = opengl_graphics::Texture>,
    {
        graphics::clear(BACKGROUND, g);

        for planet in sim.bodies() {
            self.draw_planet(planet, c, g);
        }
    }

    fn draw_planet<G>(&mut self, planet: &Planet, c: &Context, g: &mut G)
    where
        G: Graphics<Texture = opengl_graphics::Texture>,
    {
        let [x, y] = self.projection.to_screen(planet.position());

        if !planet.is_anchor() {
            self.draw_trail(planet, c, g);
        }

        let r = planet.radius() as f64;
        graphics::ellipse(planet.color(), graphics::ellipse::circle(x, y, r), c.transform, g);

        if !planet.is_anchor() {
            self.draw_label(&view::format_distance_km(planet.distance_to_anchor()), x, y, c, g);
        }
    }

    fn draw_trail<G: Graphics>(&self, planet: &Planet, c: &Context, g: &mut G) {
        let trail = planet.trail();
        let len = trail.len();
        if len <= 2 {
            return;
        }

        let points: Vec<[f64; 2]> = trail.iter().map(|p| self.projection.to_screen(p)).collect();
        let [red, green, blue, _] = planet.color();

        for (i, pair) in points.windows(2).enumerate() {
            let color = [red, green, blue, view::trail_fade(i + 1, len)];
            graphics::line(
                color,
                TRAIL_WIDTH,
                [pair[0][0], pair[0][1], pair[1][0], pair[1][1]],
                c.transform,
                g,
            );
        }
    }

    fn draw_label<G>(&mut self, text: &str, x: f64, y: f64, c: &Context, g: &mut G)
    where
        G: Graphics<Texture = opengl_graphics::Texture>,
    {
        let glyphs = match self.glyphs.as_mut() {
            Some(glyphs) => glyphs,
            None => return,
        };

        // Offset by the label width, centered on the body
        let width = glyphs.width(LABEL_SIZE, text).unwrap_or(0.0);
        let transform = c.transform.trans(x - width / 2.0, y - width / 2.0);

        if let Err(err) = graphics::text(LABEL_COLOR, LABEL_SIZE, text, glyphs, transform, g) {
            log::warn!("failed to draw label {:?}: {:?}", text, err);
        }
    }
}
