use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use blaseball_core::{Button, Buttons};
use blaseball_ui::config::PANEL_SIZE;
use blaseball_ui::panic::draw_panic_screen;
use blaseball_ui::{App, HintRefresh, InvertColors};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use log::{error, info};

/// The badge's e-paper panel, as far as the simulator can fake it.
struct Panel {
    display: SimulatorDisplay<BinaryColor>,
    inverted: bool,
    dirty: bool,
}

impl Panel {
    fn new() -> Self {
        Self {
            display: SimulatorDisplay::new(PANEL_SIZE),
            inverted: false,
            dirty: true,
        }
    }
}

impl OriginDimensions for Panel {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl DrawTarget for Panel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let inverted = self.inverted;
        self.display.draw_iter(pixels.into_iter().map(|Pixel(point, color)| {
            Pixel(point, if inverted { color.invert() } else { color })
        }))
    }
}

impl HintRefresh for Panel {
    fn hint_refresh(&mut self) {
        self.dirty = true;
    }
}

impl InvertColors for Panel {
    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }
}

fn key_to_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Up => Some(Button::Up),
        Keycode::Down => Some(Button::Down),
        Keycode::A | Keycode::Left => Some(Button::A),
        Keycode::B | Keycode::Return | Keycode::Space => Some(Button::B),
        Keycode::C | Keycode::Right => Some(Button::C),
        Keycode::Escape | Keycode::U => Some(Button::User),
        _ => None,
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut panel = Panel::new();
    let output_settings = OutputSettingsBuilder::new()
        .scale(2)
        .theme(BinaryColorTheme::Inverted)
        .build();
    let mut window = Window::new("Blaseball", &output_settings);

    let mut app: App<Panel, Infallible> = match App::new() {
        Ok(app) => app,
        Err(err) => {
            error!("{}", err);
            draw_panic_screen(&mut panel, &err.to_string());
            window.show_static(&panel.display);
            return;
        }
    };
    info!("arrows adjust, A/C move, B/Enter confirm, Esc goes home");

    let mut buttons = Buttons::none();
    'outer: loop {
        if let Err(err) = app.tick(&mut panel, buttons) {
            error!("{}", err);
            draw_panic_screen(&mut panel, &err.to_string());
            window.show_static(&panel.display);
            break;
        }
        if panel.dirty {
            panel.dirty = false;
            window.update(&panel.display);
        }

        buttons = Buttons::none();
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'outer,
                SimulatorEvent::KeyDown {
                    keycode,
                    repeat: false,
                    ..
                } => {
                    if let Some(button) = key_to_button(keycode) {
                        buttons.press(button);
                    }
                }
                _ => (),
            }
        }

        thread::sleep(Duration::from_millis(20));
    }
}
