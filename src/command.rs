//! Side-effect commands and the board they are executed on.
//!
//! The dispatcher and the sampling loop never touch hardware directly. They return
//! [`Commands`], and [`apply`] runs them against a [`Board`].

use crate::display::{self, DisplayFrame, DisplaySurface};
use crate::types::{BrightnessLevels, CursorPosition};
use heapless::Vec;

/// Upper bound on commands produced by one dispatch or one tick.
pub const MAX_COMMANDS: usize = 4;

/// Commands returned by a single reaction.
pub type Commands = Vec<Command, MAX_COMMANDS>;

/// One externally visible effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Write new duty levels to both LED channels.
    SetBrightness(BrightnessLevels),
    /// Start or stop both PWM outputs, keeping their duty levels.
    SetOutputsEnabled(bool),
    /// Drive the status LED.
    SetStatusLed(bool),
    /// Redraw the whole display.
    Render(DisplayFrame),
    /// Draw the status border over the current frame.
    DrawStatusBorder,
    /// Blank the display.
    ClearDisplay,
    /// Emit the diagnostic coordinate line.
    Report(CursorPosition),
    /// Reboot into the firmware loader. Never returns.
    EnterBootloader,
}

/// Hardware the commands are executed on.
///
/// Implement this for your board. Methods cannot fail; handle peripheral errors
/// internally. The display is lent out through [`Board::with_display`] so the
/// implementation can hold whatever lock guards it for the duration of one draw.
pub trait Board {
    /// Sets the duty level of both LED channels (`0..=PWM_WRAP`).
    fn set_brightness(&mut self, levels: BrightnessLevels);

    /// Enables or disables both PWM outputs as a whole.
    fn set_outputs_enabled(&mut self, enabled: bool);

    /// Turns the status LED on or off.
    fn set_status_led(&mut self, on: bool);

    /// Runs `draw` with exclusive access to the display.
    fn with_display(&mut self, draw: impl FnOnce(&mut dyn DisplaySurface));

    /// Emits one diagnostic line for `cursor` (formatted as `X: <x>, Y: <y>`).
    fn report(&mut self, cursor: CursorPosition);

    /// Reboots into the firmware loader.
    fn enter_bootloader(&mut self) -> !;
}

/// Executes one command.
pub fn apply<B: Board + ?Sized>(board: &mut B, command: &Command) {
    match *command {
        Command::SetBrightness(levels) => board.set_brightness(levels),
        Command::SetOutputsEnabled(enabled) => board.set_outputs_enabled(enabled),
        Command::SetStatusLed(on) => board.set_status_led(on),
        Command::Render(frame) => board.with_display(|surface| frame.render(surface)),
        Command::DrawStatusBorder => {
            board.with_display(|surface| display::draw_status_border(surface))
        }
        Command::ClearDisplay => board.with_display(|surface| display::clear(surface)),
        Command::Report(cursor) => board.report(cursor),
        Command::EnterBootloader => board.enter_bootloader(),
    }
}

/// Executes commands in order.
pub fn apply_all<B: Board + ?Sized>(board: &mut B, commands: &[Command]) {
    for command in commands {
        apply(board, command);
    }
}

/// Commands that bring the board into its power-on state: status LED off, outputs
/// enabled but dark, display blank.
pub fn startup_commands() -> Commands {
    let mut commands = Commands::new();
    push(&mut commands, Command::SetStatusLed(false));
    push(&mut commands, Command::SetBrightness(BrightnessLevels::OFF));
    push(&mut commands, Command::SetOutputsEnabled(true));
    push(&mut commands, Command::ClearDisplay);
    commands
}

/// Appends to a command list sized for the worst case of its producer.
#[inline]
pub(crate) fn push(commands: &mut Commands, command: Command) {
    // Producers emit at most MAX_COMMANDS; overflow would be a logic error.
    let pushed = commands.push(command);
    debug_assert!(pushed.is_ok(), "command list overflow");
}
