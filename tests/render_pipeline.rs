use mandelzoom::{
    Complex, ComplexRegion, FilePresenterPort, FractalError, PpmFilePresenter, RenderSettings,
    Viewport, ZoomController, evaluate_region, render_viewport, viewport_to_complex_region,
};

fn settings() -> RenderSettings {
    RenderSettings {
        pixel_width: 4,
        pixel_height: 4,
        max_iterations: 50,
        ..RenderSettings::default()
    }
}

#[test]
fn classic_region_field_is_reproducible() {
    let region = ComplexRegion::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    let config = settings().validate().unwrap();

    let expected = [0, 1, 1, 1, 0, 2, 5, 4, 50, 50, 50, 50, 0, 2, 5, 4];

    for _ in 0..8 {
        let field = evaluate_region(region, 4, 4, &config).unwrap();
        assert_eq!(field.data(), &expected);
    }
}

#[test]
fn classic_region_is_identical_when_chunked() {
    let region = ComplexRegion::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    let whole = evaluate_region(region, 4, 4, &settings().validate().unwrap()).unwrap();

    for chunk_size in [1, 3, 4, 5] {
        let config = RenderSettings {
            chunk_size: Some(chunk_size),
            ..settings()
        }
        .validate()
        .unwrap();

        assert_eq!(evaluate_region(region, 4, 4, &config).unwrap(), whole);
    }
}

#[test]
fn viewport_mapping_matches_reference_values() {
    let base = Viewport {
        center: Complex::ZERO,
        zoom: 1.0,
        aspect_ratio: 1.0,
        pixel_width: 8,
        pixel_height: 8,
    };

    assert_eq!(
        viewport_to_complex_region(&base, 1.5).unwrap(),
        ComplexRegion::new(-1.5, 1.5, -1.5, 1.5).unwrap()
    );
    assert_eq!(
        viewport_to_complex_region(&base.zoomed_by(2.0), 1.5).unwrap(),
        ComplexRegion::new(-0.75, 0.75, -0.75, 0.75).unwrap()
    );
}

#[test]
fn negative_zoom_fails_before_rendering() {
    let config = settings().validate().unwrap();
    let viewport = Viewport::for_pixels(Complex::ZERO, -1.0, 4, 4);

    assert!(matches!(
        render_viewport(&viewport, &config),
        Err(FractalError::InvalidZoom { zoom }) if zoom == -1.0
    ));
}

#[test]
fn zoom_sequence_writes_sorted_ppm_frames() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderSettings {
        pixel_width: 6,
        pixel_height: 4,
        num_frames: 3,
        zoom_factor: 2.0,
        ..settings()
    }
    .validate()
    .unwrap();

    let presenter = PpmFilePresenter::new();
    assert_eq!(presenter.extension(), "ppm");

    let paths = ZoomController::new(presenter, config)
        .run(dir.path())
        .unwrap();

    let mut on_disk: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    on_disk.sort();

    assert_eq!(on_disk, vec!["frame_0000.ppm", "frame_0001.ppm", "frame_0002.ppm"]);
    for path in paths {
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"P6\n6 4\n255\n"));
        assert_eq!(bytes.len(), b"P6\n6 4\n255\n".len() + 6 * 4 * 3);
    }
}
