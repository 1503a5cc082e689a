use image::{ImageBuffer, Pixel};

/// 1-D Gaussian weights for an odd `size`, sigma derived from the size.
///
/// Sizes up to 7 use the classic small-kernel tables; larger sizes use
/// `sigma = 0.3 * ((size - 1) / 2 - 1) + 0.8`.
pub fn gaussian_kernel(size: u32) -> Vec<f32> {
    match size {
        1 => vec![1.0],
        3 => vec![0.25, 0.5, 0.25],
        5 => vec![0.0625, 0.25, 0.375, 0.25, 0.0625],
        7 => vec![
            0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
        ],
        _ => {
            let half = f64::from(size.saturating_sub(1)) * 0.5;
            let sigma = 0.3f64.mul_add(half - 1.0, 0.8);
            let scale = -0.5 / (sigma * sigma);
            let raw: Vec<f64> = (0..size)
                .map(|i| {
                    let x = f64::from(i) - half;
                    (scale * x * x).exp()
                })
                .collect();
            let sum: f64 = raw.iter().sum();
            #[allow(clippy::cast_possible_truncation)]
            let kernel: Vec<f32> = raw.into_iter().map(|w| (w / sum) as f32).collect();
            kernel
        }
    }
}

/// Gaussian blur with a `size`×`size` kernel, applied per channel.
pub fn gaussian_blur<P>(image: &ImageBuffer<P, Vec<u8>>, size: u32) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    convolve_separable(image, &gaussian_kernel(size))
}

/// Mirror an out-of-range index back into `0..len` without repeating the edge
/// sample (`gfedcb|abcdefgh|gfedcba`).
fn reflect_101(idx: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let len = len as isize;
    let period = 2 * (len - 1);
    let mut i = idx.rem_euclid(period);
    if i >= len {
        i = period - i;
    }
    i.unsigned_abs()
}

/// Row pass then column pass over every channel. Written by hand because
/// `imageproc`'s separable filters clamp at the border instead of reflecting.
fn convolve_separable<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    kernel: &[f32],
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (w, h) = image.dimensions();
    let (width, height) = (w as usize, h as usize);
    let channels = usize::from(P::CHANNEL_COUNT);
    let mut out = ImageBuffer::<P, Vec<u8>>::new(w, h);
    if width == 0 || height == 0 || kernel.len() <= 1 {
        out.copy_from_slice(image.as_raw());
        return out;
    }
    let radius = (kernel.len() / 2) as isize;
    let src = image.as_raw();
    let row_len = width * channels;

    let mut horiz = vec![0f32; width * height * channels];
    for y in 0..height {
        let row_start = y * row_len;
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0f32;
                for (k, weight) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - radius, width);
                    acc += weight * f32::from(src[row_start + sx * channels + c]);
                }
                horiz[row_start + x * channels + c] = acc;
            }
        }
    }

    let dst: &mut [u8] = &mut out;
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0f32;
                for (k, weight) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - radius, height);
                    acc += weight * horiz[sy * row_len + x * channels + c];
                }
                dst[y * row_len + x * channels + c] = crate::util::rounded_u8(acc);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn noise_image(width: u32, height: u32) -> RgbImage {
        let mut state: u32 = 0x1234_5678;
        RgbImage::from_fn(width, height, |_, _| {
            let mut next = || {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            };
            Rgb([next(), next(), next()])
        })
    }

    fn channel_variance(img: &RgbImage, channel: usize) -> f64 {
        let values: Vec<f64> = img.pixels().map(|p| f64::from(p.0[channel])).collect();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
    }

    #[test]
    fn kernels_are_normalized_and_symmetric() {
        for size in [1, 3, 5, 7, 9, 11, 13, 15, 21] {
            let kernel = gaussian_kernel(size);
            assert_eq!(kernel.len(), size as usize);
            let sum: f32 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "size {size} sums to {sum}");
            for i in 0..kernel.len() / 2 {
                assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn reflect_101_mirrors_without_repeating_edge() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(-10, 3), 2);
        assert_eq!(reflect_101(7, 1), 0);
    }

    #[test]
    fn kernel_of_one_is_identity() {
        let img = noise_image(9, 7);
        assert_eq!(gaussian_blur(&img, 1), img);
    }

    #[test]
    fn flat_image_stays_flat() {
        let img = RgbImage::from_pixel(6, 4, Rgb([90, 140, 200]));
        let out = gaussian_blur(&img, 15);
        assert_eq!(out, img);
    }

    #[test]
    fn wider_kernels_smooth_more() {
        let img = noise_image(64, 64);
        for c in 0..3 {
            let mut previous = channel_variance(&img, c);
            for k in [3, 5, 9, 15] {
                let out = gaussian_blur(&img, k);
                assert_eq!(out.dimensions(), img.dimensions());
                let v = channel_variance(&out, c);
                assert!(v <= previous, "k={k} channel {c}: {v} > {previous}");
                previous = v;
            }
        }
    }
}
