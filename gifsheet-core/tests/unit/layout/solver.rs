use super::*;
use std::sync::Arc;

fn frame(index: u32, width: u32, height: u32) -> Frame {
    Frame::new(
        index,
        Arc::new(vec![0u8; (width * height * 4) as usize]),
        width,
        height,
        0,
        0,
        100,
    )
    .unwrap()
}

fn uniform_frames(n: u32, width: u32, height: u32) -> Vec<Frame> {
    (0..n).map(|i| frame(i, width, height)).collect()
}

fn grid_config(columns: Option<u32>, padding: u32) -> LayoutConfig {
    LayoutConfig {
        mode: SheetMode::Grid,
        padding,
        columns,
    }
}

#[test]
fn horizontal_strip_is_one_row_edge_adjacent_at_zero_padding() {
    let frames = uniform_frames(5, 10, 10);
    let geo = resolve_geometry(&frames, &LayoutConfig::default()).unwrap();

    assert_eq!((geo.cols, geo.rows), (5, 1));
    assert_eq!((geo.width, geo.height), (50, 10));
    let xs: Vec<u32> = (0..5).map(|i| geo.cell_origin(i).0).collect();
    assert_eq!(xs, vec![0, 10, 20, 30, 40]);
    assert!((0..5).all(|i| geo.cell_origin(i).1 == 0));
}

#[test]
fn vertical_strip_is_one_column() {
    let frames = uniform_frames(3, 7, 4);
    let config = LayoutConfig {
        mode: SheetMode::Vertical,
        padding: 2,
        columns: None,
    };
    let geo = resolve_geometry(&frames, &config).unwrap();

    assert_eq!((geo.cols, geo.rows), (1, 3));
    assert_eq!((geo.width, geo.height), (7, 3 * 4 + 2 * 2));
    assert_eq!(geo.cell_origin(2), (0, 12));
}

#[test]
fn grid_cells_are_sized_to_the_largest_patch() {
    let frames = vec![frame(0, 8, 8), frame(1, 10, 6), frame(2, 6, 10), frame(3, 10, 10)];
    let geo = resolve_geometry(&frames, &grid_config(Some(2), 2)).unwrap();

    assert_eq!((geo.cell_width, geo.cell_height), (10, 10));
    assert_eq!((geo.cols, geo.rows), (2, 2));
    assert_eq!((geo.width, geo.height), (22, 22));
    assert_eq!(geo.cell_origin(0), (0, 0));
    assert_eq!(geo.cell_origin(1), (12, 0));
    assert_eq!(geo.cell_origin(2), (0, 12));
    assert_eq!(geo.cell_origin(3), (12, 12));
}

#[test]
fn grid_auto_columns_is_ceil_sqrt() {
    let geo = resolve_geometry(&uniform_frames(3, 4, 4), &grid_config(None, 0)).unwrap();
    assert_eq!((geo.cols, geo.rows), (2, 2));

    let geo = resolve_geometry(&uniform_frames(10, 4, 4), &grid_config(None, 0)).unwrap();
    assert_eq!((geo.cols, geo.rows), (4, 3));
}

#[test]
fn columns_are_ignored_outside_grid_mode() {
    let frames = uniform_frames(4, 5, 5);
    let horizontal = LayoutConfig {
        mode: SheetMode::Horizontal,
        padding: 0,
        columns: Some(2),
    };
    let geo = resolve_geometry(&frames, &horizontal).unwrap();
    assert_eq!((geo.cols, geo.rows), (4, 1));

    let vertical = LayoutConfig {
        mode: SheetMode::Vertical,
        padding: 0,
        columns: Some(2),
    };
    let geo = resolve_geometry(&frames, &vertical).unwrap();
    assert_eq!((geo.cols, geo.rows), (1, 4));
}

#[test]
fn single_frame_is_1x1_regardless_of_mode() {
    let frames = uniform_frames(1, 9, 3);
    for mode in [SheetMode::Horizontal, SheetMode::Vertical, SheetMode::Grid] {
        let config = LayoutConfig {
            mode,
            padding: 5,
            columns: None,
        };
        let geo = resolve_geometry(&frames, &config).unwrap();
        assert_eq!((geo.cols, geo.rows), (1, 1));
        // (n-1) * padding terms vanish at a single cell.
        assert_eq!((geo.width, geo.height), (9, 3));
    }
}

#[test]
fn columns_beyond_frame_count_leave_trailing_cells_unused() {
    let geo = resolve_geometry(&uniform_frames(2, 4, 4), &grid_config(Some(5), 1)).unwrap();
    assert_eq!((geo.cols, geo.rows), (5, 1));
    assert_eq!(geo.width, 5 * 4 + 4);
}

#[test]
fn empty_frames_is_an_empty_input_error() {
    let err = resolve_geometry(&[], &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, GifsheetError::EmptyInput(_)));
}

#[test]
fn cell_rectangles_never_overlap() {
    let frames = vec![frame(0, 8, 8), frame(1, 10, 6), frame(2, 6, 10), frame(3, 10, 10), frame(4, 9, 9)];
    for mode in [SheetMode::Horizontal, SheetMode::Vertical, SheetMode::Grid] {
        for padding in [0u32, 3] {
            for columns in [None, Some(1), Some(2), Some(4)] {
                let config = LayoutConfig {
                    mode,
                    padding,
                    columns,
                };
                let geo = resolve_geometry(&frames, &config).unwrap();
                let cells: Vec<(u32, u32)> =
                    (0..frames.len()).map(|i| geo.cell_origin(i)).collect();
                for (i, &(ax, ay)) in cells.iter().enumerate() {
                    for &(bx, by) in cells.iter().skip(i + 1) {
                        let disjoint_x = ax + geo.cell_width <= bx || bx + geo.cell_width <= ax;
                        let disjoint_y = ay + geo.cell_height <= by || by + geo.cell_height <= ay;
                        assert!(
                            disjoint_x || disjoint_y,
                            "cells overlap for {mode:?} padding={padding} columns={columns:?}"
                        );
                    }
                }
            }
        }
    }
}
