use std::{cell::RefCell, rc::Rc};

use spectra::{
    convert, CanvasPoint, ColorChange, Fields, Palette, Picker, PickerOptions, Rgb, Source,
    SpectrumStyle,
};

#[test]
fn picking_from_the_rendered_spectrum() {
    let mut picker = Picker::new(PickerOptions {
        width: 120,
        height: 80,
        style: SpectrumStyle::Darkened,
        ..Default::default()
    })
    .unwrap();

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    picker.subscribe(move |change: &ColorChange| sink.borrow_mut().push(*change));

    // Near the top left corner the spectrum is close to pure red.
    let readout = picker.pick_at(CanvasPoint::new(0, 0)).clone();
    let color = picker.color();
    assert!(color.red > 240 && color.green < 10 && color.blue == 0, "{color:?}");
    assert_eq!(readout.hex, Some(format!("#{}", color.to_hex())));
    assert_eq!(readout.rgb, Some(color.to_string()));

    // The bottom row is almost black.
    picker.pick_at(CanvasPoint::new(60, 79));
    let color = picker.color();
    assert!(color.red <= 2 && color.green <= 2 && color.blue <= 2, "{color:?}");

    let changes = changes.borrow();
    assert_eq!(changes.len(), 2);
    assert!(changes.iter().all(|change| change.source == Source::Pointer));
}

#[test]
fn surface_pixels_agree_with_sampling() {
    let picker = Picker::new(PickerOptions::default()).unwrap();
    let surface = picker.surface();

    for (x, y) in [(0, 0), (57, 13), (199, 199), (100, 100)] {
        assert_eq!(
            surface.get(CanvasPoint::new(x, y)),
            Some(spectra::sample_canvas_pixel(surface, x, y))
        );
    }
}

#[test]
fn typed_fields_stay_in_sync() {
    let mut picker = Picker::new(PickerOptions {
        default_color: "#ffffff".to_owned(),
        fields: Fields::standard(),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(picker.color(), Rgb::WHITE);
    assert_eq!(picker.readout().hsl.as_deref(), Some("0, 0%, 100%"));

    let readout = picker.input_hex("#3366CC").unwrap();
    assert_eq!(readout.rgb.as_deref(), Some("51, 102, 204"));
    assert_eq!(readout.hsl.as_deref(), Some("220, 60%, 50%"));
    assert_eq!(readout.cmyk, None);

    // The readout of one field is accepted as input by the same field.
    let hsl = readout.hsl.clone().unwrap();
    let readout = picker.input_hsl(&hsl).unwrap();
    assert_eq!(readout.hex.as_deref(), Some("#3366CC"));
}

#[test]
fn palette_colors_feed_the_picker() {
    let loaded = Palette::default().load(["green", "unknown"]);
    let green = loaded.get("green").unwrap();

    let mut picker = Picker::new(PickerOptions::default()).unwrap();
    let readout = picker.input_hex(&green.to_hex()).unwrap();
    assert_eq!(readout.hex.as_deref(), Some("#417440"));
    assert_eq!(convert::hex_to_rgb("#417440"), Some(green));
}
