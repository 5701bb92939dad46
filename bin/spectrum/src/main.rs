//! Render both spectrum styles to `spectrum.png` and print what a picker
//! reads at a point on each of them.
//!
//! Usage: `spectrum [x y]`

use std::error::Error;

use image::{Rgba, RgbaImage};
use spectra::{CanvasPoint, Picker, PickerOptions, Readout, Spectrum, SpectrumStyle};
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 400;
const HEIGHT_PER_STYLE: u32 = 200;

const STYLES: [SpectrumStyle; 2] = [SpectrumStyle::Shaded, SpectrumStyle::Darkened];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let x = args.next().map(|a| a.parse::<u32>()).transpose()?;
    let y = args.next().map(|a| a.parse::<u32>()).transpose()?;
    let point = CanvasPoint::new(
        x.unwrap_or(WIDTH / 3),
        y.unwrap_or(HEIGHT_PER_STYLE / 4),
    );

    let height = STYLES.len() as u32 * HEIGHT_PER_STYLE;
    let mut img = RgbaImage::new(WIDTH, height);

    for (i, style) in STYLES.iter().enumerate() {
        let spectrum = Spectrum::new(*style).render(WIDTH, HEIGHT_PER_STYLE);
        let top = i as u32 * HEIGHT_PER_STYLE;

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if y < top || y >= top + HEIGHT_PER_STYLE {
                continue;
            }
            if let Some(c) = spectrum.get(CanvasPoint::new(x, y - top)) {
                *pixel = Rgba([c.red, c.green, c.blue, 255]);
            }
        }
    }

    img.save("spectrum.png")?;
    log::info!("wrote spectrum.png ({WIDTH}x{height})");

    for style in STYLES {
        let mut picker = Picker::new(PickerOptions {
            width: WIDTH,
            height: HEIGHT_PER_STYLE,
            style,
            ..Default::default()
        })?;

        let readout = picker.pick_at(point);
        println!("{style:?} at ({}, {}):", point.x, point.y);
        print_readout(readout);
    }

    Ok(())
}

fn print_readout(readout: &Readout) {
    let fields = [
        ("HEX", &readout.hex),
        ("RGB", &readout.rgb),
        ("HSL", &readout.hsl),
        ("CMYK", &readout.cmyk),
    ];

    for (label, value) in fields {
        if let Some(value) = value {
            println!("  {label:<5}{value}");
        }
    }
}
