use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Synthesize the point-sprite mask: a square RGBA image holding a radial
/// white dot that fades to transparent at half the edge length from the
/// center. Each pixel is `255 * max(1 - 2 * dist_from_center, 0)` replicated
/// into all four channels. Pure function of `size`.
pub fn create_dot_texture(size: u32) -> Image {
    let mut data = vec![0u8; (4 * size * size) as usize];

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 / size as f32 - 0.5;
            let dy = y as f32 / size as f32 - 0.5;
            let falloff = (1.0 - 2.0 * (dx * dx + dy * dy).sqrt()).max(0.0);
            let value = (255.0 * falloff) as u8;

            let offset = (4 * (y * size + x)) as usize;
            data[offset..offset + 4].copy_from_slice(&[value; 4]);
        }
    }

    let mut image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::default(),
    );
    image.sampler = ImageSampler::linear();

    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensity(image: &Image, x: u32, y: u32) -> u8 {
        let size = image.texture_descriptor.size.width;
        let data = image.data.as_ref().expect("dot texture keeps CPU data");
        data[(4 * (y * size + x)) as usize]
    }

    #[test]
    fn buffer_holds_four_channels_per_pixel() {
        let image = create_dot_texture(16);
        assert_eq!(image.data.as_ref().map(Vec::len), Some(4 * 16 * 16));
    }

    #[test]
    fn center_pixel_is_fully_lit() {
        let image = create_dot_texture(64);
        assert_eq!(intensity(&image, 32, 32), 255);
    }

    #[test]
    fn pixels_at_half_size_or_further_are_dark() {
        let size = 64;
        let image = create_dot_texture(size);

        // Corners sit at distance ~0.707 * size from the center.
        assert_eq!(intensity(&image, 0, 0), 0);
        assert_eq!(intensity(&image, size - 1, 0), 0);
        assert_eq!(intensity(&image, 0, size - 1), 0);
        assert_eq!(intensity(&image, size - 1, size - 1), 0);
        // Edge midpoints sit at exactly half the edge length.
        assert_eq!(intensity(&image, 32, 0), 0);
        assert_eq!(intensity(&image, 0, 32), 0);
    }

    #[test]
    fn dot_is_radially_symmetric() {
        let size = 64;
        let image = create_dot_texture(size);

        for (x, y) in [(20, 32), (32, 9), (25, 41), (10, 10)] {
            let value = intensity(&image, x, y);
            assert_eq!(value, intensity(&image, size - x, y));
            assert_eq!(value, intensity(&image, x, size - y));
            assert_eq!(value, intensity(&image, size - x, size - y));
        }
    }

    #[test]
    fn all_channels_match_within_a_pixel() {
        let image = create_dot_texture(32);
        let data = image.data.as_ref().expect("dot texture keeps CPU data");
        for pixel in data.chunks_exact(4) {
            assert!(pixel.iter().all(|&channel| channel == pixel[0]));
        }
    }
}
