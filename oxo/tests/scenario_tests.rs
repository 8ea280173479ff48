
use oxo::notate::Notate;
use oxo::{Error, Game, Grid, Outcome, Player, Point, Presenter, Reader, Session};

///
/// A presenter that keeps the latest thing it saw of each kind.
///
struct Observer
{
    frames: usize,
    last_grid: Option<String>,
    last_rejection: Option<String>,
    conclusion: Option<Outcome>
}

impl Observer
{
    fn new () -> Observer
    {
        Observer { frames: 0, last_grid: None, last_rejection: None, conclusion: None }
    }
}

impl Presenter for Observer
{
    fn conclude (& mut self, outcome: & Outcome)
    {
        self.conclusion = Some(* outcome);
    }

    fn prompt (& mut self, _to_move: & Player)
    {
    }

    fn reject (& mut self, error: & Error)
    {
        self.last_rejection = Some(error.to_string());
    }

    fn render (& mut self, grid: & Grid)
    {
        self.frames += 1;
        self.last_grid = Some(grid.notate());
    }
}

///
/// A reader that feeds a fixed list of lines and then runs dry.
///
struct Feed
{
    lines: Vec<String>
}

impl Feed
{
    fn of (lines: & [& str]) -> Feed
    {
        let mut lines = lines.iter().map(|line| line.to_string()).collect::<Vec<String>>();
        lines.reverse();
        Feed { lines }
    }
}

impl Reader for Feed
{
    fn next_line (& mut self) -> Option<String>
    {
        self.lines.pop()
    }
}

#[test]
fn a_session_plays_a_column_win_to_its_conclusion ()
{
    let mut session = Session::new(Observer::new(), Feed::of(& ["1", "2", "4", "3", "7"]));
    session.run_loop();

    assert_eq!(session.game().outcome(), Outcome::Won(Player::X));
    assert_eq!(session.presenter().conclusion, Some(Outcome::Won(Player::X)));
    assert_eq!(session.presenter().frames, 6);
    assert_eq!(session.presenter().last_grid.as_deref(), Some("XOO/X../X.."));
}

#[test]
fn a_session_plays_the_draw_sequence_to_its_conclusion ()
{
    let mut session = Session::new(Observer::new(), Feed::of(& ["1", "2", "3", "5", "4", "7", "6", "9", "8"]));
    session.run_loop();

    assert_eq!(session.game().outcome(), Outcome::Draw);
    assert_eq!(session.presenter().conclusion, Some(Outcome::Draw));
    assert_eq!(session.presenter().last_grid.as_deref(), Some("XOX/XOX/OXO"));
}

#[test]
fn rejected_lines_never_consume_a_turn ()
{
    let mut session = Session::new(Observer::new(), Feed::of(& ["junk", "0", "1", "1", "  2  ", "4", "3", "99", "7"]));
    session.run_loop();

    assert_eq!(session.game().outcome(), Outcome::Won(Player::X));
    assert_eq!(session.presenter().last_rejection.as_deref(), Some("No cell is labelled '99'."));
}

#[test]
fn an_exhausted_reader_ends_the_session_silently ()
{
    let mut session = Session::new(Observer::new(), Feed::of(& ["1"]));
    session.run_loop();

    assert_eq!(session.game().outcome(), Outcome::InProgress);
    assert_eq!(session.presenter().conclusion, None);
    assert_eq!(session.presenter().frames, 2);
}

#[test]
fn rejection_kinds_cover_the_taxonomy ()
{
    let mut game = Game::new();
    game.apply("5").unwrap();

    assert_eq!(game.apply("x1"), Err(Error::InvalidLabel("x1".to_owned())));
    assert_eq!(game.apply("42"), Err(Error::LabelNotFound(42)));
    assert_eq!(game.apply("5"), Err(Error::CellOccupied(Point::new(1, 1))));
    assert_eq!(game.to_move(), Player::O);
}
