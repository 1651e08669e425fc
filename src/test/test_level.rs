mod test {
    use crate::core::*;

    #[test]
    fn glyphs_map_to_terrain_and_dynamic_entities() {
        let (grid, board) = parse_level("@*.").unwrap();

        // Dynamic glyphs leave plain floor behind in the terrain.
        assert_eq!(grid.kind_at(Coord::new(0, 0)), Ok(CellKind::Floor));
        assert_eq!(grid.kind_at(Coord::new(1, 0)), Ok(CellKind::Floor));
        assert_eq!(grid.kind_at(Coord::new(2, 0)), Ok(CellKind::Target));

        assert_eq!(board.player_position(), Coord::new(0, 0));
        assert!(board.is_crate_at(Coord::new(1, 0)));
        assert_eq!(board.crate_count(), 1);
    }

    #[test]
    fn loading_the_same_text_twice_gives_identical_terrain() {
        let level = r#"
XXXXX
X@*.X
X . X
XXXXX
"#;
        let (first, _) = parse_level(level).unwrap();
        let (second, _) = parse_level(level).unwrap();

        assert_eq!(first.width(), second.width());
        assert_eq!(first.height(), second.height());
        for y in 0..first.height() {
            for x in 0..first.width() {
                let coord = Coord::new(x, y);
                assert_eq!(first.kind_at(coord), second.kind_at(coord));
            }
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse_level("XXX\nX@").unwrap_err();
        assert!(matches!(err, LevelError::MalformedLevel(_)));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            parse_level("").unwrap_err(),
            LevelError::MalformedLevel(_)
        ));
        assert!(matches!(
            parse_level("\n\n").unwrap_err(),
            LevelError::MalformedLevel(_)
        ));
    }

    #[test]
    fn unrecognized_glyph_is_rejected() {
        let err = parse_level("X@?X").unwrap_err();
        assert!(matches!(err, LevelError::MalformedLevel(_)));
    }

    #[test]
    fn level_without_player_is_rejected() {
        let err = parse_level("X *.X").unwrap_err();
        assert!(matches!(err, LevelError::MalformedLevel(_)));
    }

    #[test]
    fn level_with_two_players_is_rejected() {
        let err = parse_level("X@@X").unwrap_err();
        assert!(matches!(err, LevelError::MalformedLevel(_)));
    }

    #[test]
    fn kind_at_outside_the_grid_is_out_of_bounds() {
        let (grid, _) = parse_level("X@X").unwrap();

        assert_eq!(
            grid.kind_at(Coord::new(3, 0)),
            Err(LevelError::OutOfBounds(Coord::new(3, 0)))
        );
        assert_eq!(
            grid.kind_at(Coord::new(0, -1)),
            Err(LevelError::OutOfBounds(Coord::new(0, -1)))
        );
    }

    #[test]
    fn in_bounds_tracks_the_rectangle() {
        let (grid, _) = parse_level("X@X\nX.X").unwrap();

        assert!(grid.in_bounds(Coord::new(0, 0)));
        assert!(grid.in_bounds(Coord::new(2, 1)));
        assert!(!grid.in_bounds(Coord::new(3, 0)));
        assert!(!grid.in_bounds(Coord::new(0, 2)));
        assert!(!grid.in_bounds(Coord::new(-1, 0)));
    }
}
