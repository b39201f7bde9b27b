use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::*;

pub const BUTTON_COLOR: Rgb565 = Rgb565::WHITE;
pub const LOGO_COLOR: Rgb565 = Rgb565::BLUE;

/// Screens outside of gameplay.
///
/// Valid transitions:
/// - TopMenu -> DifficultySelect, Instructions, Terminated
/// - DifficultySelect -> TopMenu, or into a maze session
/// - Instructions -> TopMenu
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuState {
    TopMenu,
    DifficultySelect,
    Instructions,
    /// Quit was pressed, nothing is accepted anymore
    Terminated,
}

/// What pressing a button leads to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Goto(MenuState),
    /// Start a session on a maze from the given tier, then return to the top menu.
    Play(Difficulty),
}

/// A labelled touch target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub bounds: Rectangle,
    pub label_at: Point,
    pub on_press: Transition,
}

impl Button {
    const fn new(
        label: &'static str,
        (x, y, width, height): (i32, i32, u32, u32),
        label_at: (i32, i32),
        on_press: Transition,
    ) -> Self {
        Self {
            label,
            bounds: Rectangle::new(Point::new(x, y), Size::new(width, height)),
            label_at: Point::new(label_at.0, label_at.1),
            on_press,
        }
    }

    /// Hit test, both edges inclusive.
    pub fn contains(&self, point: TouchPoint) -> bool {
        let Point { x: left, y: top } = self.bounds.top_left;
        let right = left + self.bounds.size.width as i32;
        let bottom = top + self.bounds.size.height as i32;
        (left as f32..=right as f32).contains(&point.x)
            && (top as f32..=bottom as f32).contains(&point.y)
    }

    pub fn draw<D>(&self, target: &mut D) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(BUTTON_COLOR))
            .draw(target)?;
        write_label(target, self.label, self.label_at)
    }
}

use MenuState::*;
use Transition::*;

const BACK: Button = Button::new("Back", (10, 10, 60, 30), (20, 15), Goto(TopMenu));

static TOP_MENU_BUTTONS: [Button; 3] = [
    Button::new("Start", (40, 120, 100, 40), (50, 130), Goto(DifficultySelect)),
    Button::new("Rules", (180, 120, 100, 40), (190, 130), Goto(Instructions)),
    Button::new("Quit", (110, 180, 100, 40), (120, 190), Goto(Terminated)),
];

static DIFFICULTY_BUTTONS: [Button; 4] = [
    BACK,
    Button::new("Easy", (100, 80, 120, 30), (110, 85), Play(Difficulty::Easy)),
    Button::new("Medium", (100, 120, 120, 30), (110, 125), Play(Difficulty::Medium)),
    Button::new("Hard", (100, 160, 120, 30), (110, 165), Play(Difficulty::Hard)),
];

static INSTRUCTION_BUTTONS: [Button; 1] = [BACK];

const BANNER: Rectangle = Rectangle::new(Point::new(30, 15), Size::new(260, 60));

// block letters drawn over the banner
const LOGO: [(i32, i32, u32, u32); 10] = [
    (40, 20, 15, 50),
    (80, 20, 15, 50),
    (155, 20, 45, 13),
    (155, 57, 45, 13),
    (210, 20, 20, 50),
    (230, 20, 25, 15),
    (230, 40, 25, 10),
    (230, 55, 25, 15),
    (260, 20, 20, 35),
    (260, 60, 20, 10),
];

const INSTRUCTIONS: [&str; 5] = [
    "Instructions:",
    "Touch the top, bottom, left or right edge",
    "of the screen to walk in that direction.",
    "Guide your marker through the maze to the",
    "yellow finish square. Red tiles are walls.",
];

impl MenuState {
    pub fn buttons(self) -> &'static [Button] {
        match self {
            TopMenu => &TOP_MENU_BUTTONS,
            DifficultySelect => &DIFFICULTY_BUTTONS,
            Instructions => &INSTRUCTION_BUTTONS,
            Terminated => &[],
        }
    }

    /// The button under `point`, if any.
    pub fn hit(self, point: TouchPoint) -> Option<&'static Button> {
        self.buttons().iter().find(|button| button.contains(point))
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Terminated)
    }

    pub fn draw<D>(self, target: &mut D) -> core::result::Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(BACKGROUND)?;

        match self {
            TopMenu => draw_title(target)?,
            DifficultySelect => {}
            Instructions => {
                let mut cursor = TextCursor::new(Point::new(20, 60));
                for line in INSTRUCTIONS {
                    cursor.write_line(target, line)?;
                }
            }
            Terminated => {
                TextCursor::new(Point::new(20, 110)).write_line(target, "Please restart the device")?;
            }
        }

        for button in self.buttons() {
            button.draw(target)?;
        }
        Ok(())
    }
}

fn draw_title<D>(target: &mut D) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    BANNER
        .into_styled(PrimitiveStyle::with_fill(BUTTON_COLOR))
        .draw(target)?;

    let logo_style = PrimitiveStyle::with_fill(LOGO_COLOR);
    for (x, y, width, height) in LOGO {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(logo_style)
            .draw(target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: MenuState, x: f32, y: f32) -> Option<Transition> {
        state
            .hit(TouchPoint::new(x, y))
            .map(|button| button.on_press)
    }

    #[test]
    fn top_menu_buttons_lead_to_screens() {
        assert_eq!(press(TopMenu, 50.0, 130.0), Some(Goto(DifficultySelect)));
        assert_eq!(press(TopMenu, 200.0, 140.0), Some(Goto(Instructions)));
        assert_eq!(press(TopMenu, 150.0, 200.0), Some(Goto(Terminated)));
    }

    #[test]
    fn hit_test_edges_are_inclusive() {
        assert_eq!(press(TopMenu, 40.0, 120.0), Some(Goto(DifficultySelect)));
        assert_eq!(press(TopMenu, 140.0, 160.0), Some(Goto(DifficultySelect)));
        assert_eq!(press(TopMenu, 140.5, 160.0), None);
        assert_eq!(press(TopMenu, 39.9, 130.0), None);
    }

    #[test]
    fn difficulty_select_starts_tiers_or_goes_back() {
        assert_eq!(press(DifficultySelect, 20.0, 20.0), Some(Goto(TopMenu)));
        assert_eq!(press(DifficultySelect, 150.0, 90.0), Some(Play(Difficulty::Easy)));
        assert_eq!(press(DifficultySelect, 150.0, 130.0), Some(Play(Difficulty::Medium)));
        assert_eq!(press(DifficultySelect, 150.0, 170.0), Some(Play(Difficulty::Hard)));
        assert_eq!(press(DifficultySelect, 150.0, 115.0), None);
    }

    #[test]
    fn instructions_only_go_back() {
        assert_eq!(press(Instructions, 30.0, 30.0), Some(Goto(TopMenu)));
        assert_eq!(press(Instructions, 150.0, 130.0), None);
    }

    #[test]
    fn terminated_accepts_nothing() {
        assert!(Terminated.is_terminal());
        assert!(!TopMenu.is_terminal());
        assert_eq!(press(Terminated, 50.0, 130.0), None);
    }

    #[test]
    fn no_point_hits_two_buttons() {
        for state in [TopMenu, DifficultySelect, Instructions] {
            for x in (0..=SCREEN_WIDTH).step_by(2) {
                for y in (0..=SCREEN_HEIGHT).step_by(2) {
                    let point = TouchPoint::new(x as f32, y as f32);
                    let hits = state.buttons().iter().filter(|b| b.contains(point)).count();
                    assert!(hits <= 1, "{:?} at ({}, {})", state, x, y);
                }
            }
        }
    }

    #[test]
    fn top_menu_draws_banner_logo_and_buttons() {
        let mut frame = FrameBuffer::new();

        TopMenu.draw(&mut frame).unwrap();

        assert_eq!(frame.pixel(Point::new(32, 17)), Some(BUTTON_COLOR));
        assert_eq!(frame.pixel(Point::new(45, 40)), Some(LOGO_COLOR));
        assert_eq!(frame.pixel(Point::new(42, 158)), Some(BUTTON_COLOR));
        assert_eq!(frame.pixel(Point::new(5, 5)), Some(BACKGROUND));
    }

    #[test]
    fn menu_redraw_is_idempotent() {
        let mut first = FrameBuffer::new();
        let mut second = FrameBuffer::new();

        DifficultySelect.draw(&mut first).unwrap();
        TopMenu.draw(&mut second).unwrap();
        DifficultySelect.draw(&mut second).unwrap();

        assert_eq!(first, second);
    }
}
