//! Glass material and colour helpers for the backdrop cells and the reveal cube.

use bevy::prelude::*;
use rand::Rng;

/// Neutral fill of a cell that is not hovered (`#aaaaaa`).
pub const BASE_GRAY: Color = Color::srgb(
    0xaa as f32 / 255.0,
    0xaa as f32 / 255.0,
    0xaa as f32 / 255.0,
);

pub(crate) const GLASS_OPACITY: f32 = 0.28;

/// Translucent, fully transmissive, nearly smooth glass.
pub fn glass_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(GLASS_OPACITY),
        alpha_mode: AlphaMode::Blend,
        specular_transmission: 1.0,
        perceptual_roughness: 0.07,
        metallic: 0.0,
        ior: 1.4,
        thickness: 1.1,
        ..default()
    }
}

pub fn reveal_cube_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb(0.0, 0.47, 0.73),
        perceptual_roughness: 0.3,
        metallic: 0.1,
        ..default()
    }
}

/// Uniform 24-bit RGB colour, never equal to [`BASE_GRAY`].
pub fn random_color(rng: &mut impl Rng) -> Color {
    loop {
        let [r, g, b]: [u8; 3] = rng.gen();
        if (r, g, b) != (0xaa, 0xaa, 0xaa) {
            return Color::srgb_u8(r, g, b);
        }
    }
}

/// Emissive glow matching a hover colour.
pub fn glow(color: Color) -> LinearRgba {
    let lin = color.to_linear();
    LinearRgba::rgb(lin.red * 2.0, lin.green * 2.0, lin.blue * 2.0)
}
