use super::*;

#[test]
fn new_surface_is_empty() {
    let surface = RecordingSurface::new();
    assert!(surface.commands().is_empty());
}

#[test]
fn records_calls_in_order() {
    let mut surface = RecordingSurface::new();
    surface.clear(PixelRect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
    surface.fill_rect(PixelRect::new(1.0, 2.0, 3.0, 4.0), "#fff").unwrap();

    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::Clear { rect: PixelRect::new(0.0, 0.0, 800.0, 600.0) },
            DrawCommand::FillRect { rect: PixelRect::new(1.0, 2.0, 3.0, 4.0), color: "#fff".into() },
        ]
    );
}

#[test]
fn fills_skips_clears() {
    let mut surface = RecordingSurface::new();
    surface.clear(PixelRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    surface.fill_rect(PixelRect::new(0.0, 0.0, 5.0, 5.0), "red").unwrap();
    surface.clear(PixelRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

    let fills: Vec<_> = surface.fills().collect();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].1, "red");
}

#[test]
fn take_drains_commands() {
    let mut surface = RecordingSurface::new();
    surface.fill_rect(PixelRect::new(0.0, 0.0, 5.0, 5.0), "red").unwrap();
    let taken = surface.take();
    assert_eq!(taken.len(), 1);
    assert!(surface.commands().is_empty());
}

#[test]
fn draw_command_json_is_tagged_by_op() {
    let cmd = DrawCommand::FillRect { rect: PixelRect::new(0.0, 450.0, 160.0, 60.0), color: "#3498db".into() };
    let json = serde_json::to_value(&cmd).unwrap();
    assert_eq!(json["op"], "fill_rect");
    assert_eq!(json["rect"]["y"], 450.0);
    assert_eq!(json["color"], "#3498db");
}

#[test]
fn surface_error_message() {
    let err = SurfaceError::Backend("context lost".into());
    assert_eq!(err.to_string(), "drawing backend failed: context lost");
}
