mod test {
    use std::collections::HashSet;

    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn level_with_no_crates_is_never_won() {
        let game = GameTestState::new("X@.X");
        assert!(!game.board.is_won(&game.grid));
    }

    #[test]
    fn all_crates_on_targets_is_won() {
        let (grid, _) = parse_level("@ ..").unwrap();
        let crates: HashSet<Coord> = [Coord::new(2, 0), Coord::new(3, 0)].into_iter().collect();
        let board = BoardState::new(Coord::new(0, 0), crates);

        assert!(board.is_won(&grid));
        assert_eq!(grid.crates_on_targets(&board), 2);
    }

    #[test]
    fn one_crate_off_target_is_not_won() {
        let (grid, _) = parse_level("@ . .").unwrap();
        let crates: HashSet<Coord> = [Coord::new(2, 0), Coord::new(3, 0)].into_iter().collect();
        let board = BoardState::new(Coord::new(0, 0), crates);

        assert!(!board.is_won(&grid));
        assert_eq!(grid.crates_on_targets(&board), 1);
    }

    #[test]
    fn solving_the_first_built_in_style_level_reports_won() {
        let level = r#"
XXXXXXX
X     X
X @*. X
X     X
XXXXXXX
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.board.is_won(&game.grid));

        let outcome = game.assert_move(Direction::Right);

        assert_eq!(outcome, MoveOutcome::PlayerMovedAndCratePushed);
        assert!(game.board.is_won(&game.grid));
        game.assert_matches(
            r#"
XXXXXXX
X     X
X  @C X
X     X
XXXXXXX
"#,
        );
    }
}
