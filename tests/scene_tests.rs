//! Scene compositor tests: clipping, blending, and layer order.

use tui_blockfall::core::Grid;
use tui_blockfall::scene::{Scene, ScreenObject, Viewport};
use tui_blockfall::types::{Blend, Coordinate, Space};

fn solid_object(
    width: usize,
    height: usize,
    position: Coordinate,
    layer: i32,
    blend: Blend,
) -> ScreenObject {
    let mut content = Grid::new(width, height);
    content.fill(Space::Filled);
    ScreenObject::new(content, position, layer, blend)
}

#[test]
fn object_past_the_left_edge_is_clipped() {
    let mut scene = Scene::new(Viewport::new(8, 3));
    scene.add_member(solid_object(
        10,
        1,
        Coordinate::new(-5, 1),
        0,
        Blend::Opaque,
    ));
    scene.render_frame();

    // Columns 0..5 receive the object's right half; the rest stay empty.
    for col in 0..5 {
        assert_eq!(scene.buffer().get(1, col).unwrap(), Space::Filled);
    }
    for col in 5..8 {
        assert_eq!(scene.buffer().get(1, col).unwrap(), Space::Empty);
    }
}

#[test]
fn object_past_the_right_and_bottom_edges_is_clipped() {
    let mut scene = Scene::new(Viewport::new(6, 4));
    scene.add_member(solid_object(
        4,
        4,
        Coordinate::new(4, 2),
        0,
        Blend::Opaque,
    ));
    scene.render_frame();

    let solid: Vec<(usize, usize)> = scene
        .rows()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, s)| s.is_solid())
                .map(move |(col, _)| (row, col))
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(solid, vec![(2, 4), (2, 5), (3, 4), (3, 5)]);
}

#[test]
fn fully_off_viewport_object_draws_nothing() {
    let mut scene = Scene::new(Viewport::new(6, 4));
    scene.add_member(solid_object(
        3,
        3,
        Coordinate::new(-3, 0),
        0,
        Blend::Opaque,
    ));
    scene.add_member(solid_object(3, 3, Coordinate::new(6, 0), 0, Blend::Opaque));
    scene.add_member(solid_object(3, 3, Coordinate::new(0, 4), 0, Blend::Opaque));
    scene.render_frame();

    assert!(scene.rows().flatten().all(Space::is_empty));
}

#[test]
fn transparent_empty_cells_let_lower_layers_show_through() {
    let mut scene = Scene::new(Viewport::new(4, 2));
    scene.add_member(solid_object(
        4,
        2,
        Coordinate::new(0, 0),
        0,
        Blend::Opaque,
    ));

    // Higher layer, transparent, with only one filled cell.
    let mut content = Grid::new(4, 2);
    content.set(0, 1, Space::Text('X')).unwrap();
    scene.add_member(ScreenObject::new(
        content,
        Coordinate::new(0, 0),
        1,
        Blend::Transparent,
    ));
    scene.render_frame();

    assert_eq!(scene.buffer().get(0, 1).unwrap(), Space::Text('X'));
    // Everywhere else the lower filled layer survived.
    assert_eq!(scene.buffer().get(0, 0).unwrap(), Space::Filled);
    assert_eq!(scene.buffer().get(1, 3).unwrap(), Space::Filled);
}

#[test]
fn opaque_empty_cells_erase_lower_layers() {
    let mut scene = Scene::new(Viewport::new(4, 2));
    scene.add_member(solid_object(
        4,
        2,
        Coordinate::new(0, 0),
        0,
        Blend::Opaque,
    ));
    // Empty opaque patch on top of the left half.
    scene.add_member(ScreenObject::new(
        Grid::new(2, 2),
        Coordinate::new(0, 0),
        1,
        Blend::Opaque,
    ));
    scene.render_frame();

    assert_eq!(scene.buffer().get(0, 0).unwrap(), Space::Empty);
    assert_eq!(scene.buffer().get(1, 1).unwrap(), Space::Empty);
    assert_eq!(scene.buffer().get(0, 2).unwrap(), Space::Filled);
}

#[test]
fn layers_composite_in_ascending_order() {
    let mut scene = Scene::new(Viewport::new(2, 1));
    // Registered high layer first; it must still end up on top.
    let mut top = Grid::new(1, 1);
    top.set(0, 0, Space::Digit(9)).unwrap();
    scene.add_member(ScreenObject::new(
        top,
        Coordinate::new(0, 0),
        5,
        Blend::Opaque,
    ));
    scene.add_member(solid_object(2, 1, Coordinate::new(0, 0), 0, Blend::Opaque));
    scene.render_frame();

    assert_eq!(scene.buffer().get(0, 0).unwrap(), Space::Digit(9));
    assert_eq!(scene.buffer().get(0, 1).unwrap(), Space::Filled);
}

#[test]
fn equal_layers_break_ties_by_registration_order() {
    let mut scene = Scene::new(Viewport::new(1, 1));
    let mut first = Grid::new(1, 1);
    first.set(0, 0, Space::Text('a')).unwrap();
    let mut second = Grid::new(1, 1);
    second.set(0, 0, Space::Text('b')).unwrap();
    scene.add_member(ScreenObject::new(
        first,
        Coordinate::new(0, 0),
        3,
        Blend::Opaque,
    ));
    scene.add_member(ScreenObject::new(
        second,
        Coordinate::new(0, 0),
        3,
        Blend::Opaque,
    ));
    scene.render_frame();

    assert_eq!(scene.buffer().get(0, 0).unwrap(), Space::Text('b'));
}

#[test]
fn members_can_move_between_frames() {
    let mut scene = Scene::new(Viewport::new(6, 1));
    let id = scene.add_member(solid_object(
        1,
        1,
        Coordinate::new(0, 0),
        0,
        Blend::Opaque,
    ));
    scene.render_frame();
    assert_eq!(scene.buffer().get(0, 0).unwrap(), Space::Filled);

    scene.member_mut(id).translate(3, 0);
    scene.render_frame();

    // The buffer is rebuilt from scratch; the old position is gone.
    assert_eq!(scene.buffer().get(0, 0).unwrap(), Space::Empty);
    assert_eq!(scene.buffer().get(0, 3).unwrap(), Space::Filled);
}

#[test]
fn rows_iterator_can_be_restarted() {
    let mut scene = Scene::new(Viewport::new(3, 2));
    scene.add_member(solid_object(1, 1, Coordinate::new(2, 1), 0, Blend::Opaque));
    scene.render_frame();

    for _ in 0..2 {
        let rows: Vec<&[Space]> = scene.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Space::Filled);
    }
}
