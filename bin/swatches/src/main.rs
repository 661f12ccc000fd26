use image::{Rgba, RgbaImage};
use toneramp::{Conformance, Mode, Scale, Step, Tuning};

const CELL_WIDTH: u32 = 80;
const CELL_HEIGHT: u32 = 80;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().unwrap_or_else(|| String::from("#3366ff"));
    let mode = match args.next().as_deref() {
        Some("dark") => Mode::Dark,
        _ => Mode::Light,
    };

    let scale = match Scale::generate(&seed, mode, Tuning::Auto) {
        Ok(scale) => scale,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    for swatch in scale.iter() {
        let marker = if swatch.is_closest_match() {
            "  <- closest to seed"
        } else {
            ""
        };
        println!(
            "{:>4}  {}  {:>5.2}:1  {:>3}{}",
            swatch.step.value(),
            swatch.hex().to_uppercase(),
            swatch.contrast,
            Conformance::from_ratio(swatch.contrast).to_string(),
            marker,
        );
    }

    let mut img = RgbaImage::new(CELL_WIDTH * Step::COUNT as u32, CELL_HEIGHT);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let swatch = &scale.swatches()[(x / CELL_WIDTH) as usize];
        *pixel = Rgba([swatch.color.red, swatch.color.green, swatch.color.blue, 255]);
    }

    img.save("swatches.png")
        .expect("could not write image to swatches.png");
}
