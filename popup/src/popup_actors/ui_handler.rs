use crate::messages::internal_messages::{
    FetchRestaurants, RenderAlert, RenderHistory, RenderInfo, RenderLoading, RenderNotification,
    RenderSettingsForm, RenderWheel, RenderWinner, SaveSettingsInput, ShowHistory, ShowMain,
    ShowSettings, SpinWheel, UserInput,
};
use crate::popup_actors::session::PopupSession;
use actix::prelude::*;
use colored::*;
use common::logger::Logger;
use common::types::settings::SettingsPatch;
use std::io::Write;
use std::str::SplitWhitespace;
use std::time::Duration;

/// Parsed form of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Spin,
    Settings,
    History,
    Back,
    Refresh,
    Save(SettingsPatch),
    Help,
    Quit,
    Empty,
    Invalid(&'static str),
    Unknown(String),
}

/// Maps a raw input line to a command. View routing stays in the session;
/// parsing here is view-agnostic.
pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None => Command::Empty,
        Some("spin") => Command::Spin,
        Some("settings") => Command::Settings,
        Some("history") => Command::History,
        Some("back") | Some("close") => Command::Back,
        Some("refresh") => Command::Refresh,
        Some("help") => Command::Help,
        Some("quit") | Some("exit") => Command::Quit,
        Some("save") => match parse_save(parts) {
            Some(patch) => Command::Save(patch),
            None => Command::Invalid("Usage: save <distance-miles> <min,max> [dietary]"),
        },
        Some(other) => Command::Unknown(other.to_string()),
    }
}

fn parse_save(mut parts: SplitWhitespace<'_>) -> Option<SettingsPatch> {
    let distance: f64 = parts.next()?.parse().ok()?;
    if !distance.is_finite() || distance <= 0.0 {
        return None;
    }
    let price = parts.next()?.to_string();
    let dietary = parts.collect::<Vec<_>>().join(" ");
    Some(SettingsPatch {
        distance: Some(distance),
        price: Some(price),
        dietary: if dietary.is_empty() { None } else { Some(dietary) },
    })
}

/// Actor `UiHandler`: the console rendition of the popup surface. Parses
/// typed lines into session commands and renders whatever the session says
/// to show.
pub struct UiHandler {
    /// Canal de envío hacia el actor `PopupSession`.
    pub session: Addr<PopupSession>,
    pub logger: Logger,
}

impl UiHandler {
    pub fn new(session: Addr<PopupSession>) -> Self {
        UiHandler {
            session,
            logger: Logger::new("UI", Color::Magenta),
        }
    }

    fn print_help(&self) {
        println!(
            "{}",
            "Commands: spin · settings · history · back · refresh · help · quit".dimmed()
        );
    }
}

impl Actor for UiHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        println!("{}", "==============================".green());
        println!("{}", "        LUNCH  LOTTO".green().bold());
        println!("{}", "==============================".green());
        self.print_help();
    }
}

impl Handler<UserInput> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: UserInput, _ctx: &mut Self::Context) -> Self::Result {
        match parse_command(&msg.line) {
            Command::Spin => self.session.do_send(SpinWheel),
            Command::Settings => self.session.do_send(ShowSettings),
            Command::History => self.session.do_send(ShowHistory),
            Command::Back => self.session.do_send(ShowMain),
            Command::Refresh => self.session.do_send(FetchRestaurants),
            Command::Save(patch) => self.session.do_send(SaveSettingsInput { patch }),
            Command::Help => self.print_help(),
            Command::Quit => System::current().stop(),
            Command::Empty => {}
            Command::Invalid(usage) => self.logger.warn(usage),
            Command::Unknown(other) => {
                self.logger
                    .warn(format!("Unknown command: {} (try `help`)", other));
            }
        }
    }
}

impl Handler<RenderLoading> for UiHandler {
    type Result = ();

    fn handle(&mut self, _msg: RenderLoading, _ctx: &mut Self::Context) -> Self::Result {
        println!("{}", "⏳ Finding healthy lunch spots near you...".dimmed());
    }
}

impl Handler<RenderWheel> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderWheel, _ctx: &mut Self::Context) -> Self::Result {
        println!();
        println!("{}", "🎰 Today's lunch wheel".bold());
        for (i, option) in msg.options.iter().enumerate() {
            println!("   {} {}", format!("{}.", i + 1).dimmed(), option.name);
        }
        println!("{}", "Type `spin` to let the wheel decide.".dimmed());
    }
}

impl Handler<RenderWinner> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderWinner, _ctx: &mut Self::Context) -> Self::Result {
        // Vueltita de ruleta antes de anunciar el ganador.
        if !msg.options.is_empty() {
            for option in msg.options.iter().cycle().take(msg.options.len() * 2) {
                print!("\r   ➜ {:<40}", option.name);
                let _ = std::io::stdout().flush();
                std::thread::sleep(Duration::from_millis(90));
            }
            println!();
        }
        println!(
            "{} {}",
            "🍴 Lunch is settled:".green().bold(),
            msg.winner.name.bold()
        );
        println!("   {}", msg.winner.maps_link.underline());
    }
}

impl Handler<RenderSettingsForm> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderSettingsForm, _ctx: &mut Self::Context) -> Self::Result {
        let settings = msg.settings;
        println!();
        println!("{}", "⚙ Settings".bold());
        println!("   distance: {:.1} miles", settings.distance);
        println!("   price:    {}", settings.price);
        println!(
            "   dietary:  {}",
            if settings.dietary.is_empty() {
                "(none)"
            } else {
                settings.dietary.as_str()
            }
        );
        println!(
            "{}",
            "Save with `save <distance-miles> <min,max> [dietary]`, or `back` to cancel.".dimmed()
        );
    }
}

impl Handler<RenderHistory> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderHistory, _ctx: &mut Self::Context) -> Self::Result {
        println!();
        if msg.history.is_empty() {
            println!("No lunch history yet. Start spinning to create some!");
            println!("{}", "Type `back` to return to the wheel.".dimmed());
            return;
        }

        // Newest first, like the original history view.
        let mut history = msg.history;
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        println!("{}", "🕘 Recent selections".bold());
        for entry in &history {
            println!("   {}  {}", entry.timestamp.dimmed(), entry.name);
            println!("       {}", entry.maps_link.dimmed());
        }
        println!("{}", "Type `back` to return to the wheel.".dimmed());
    }
}

impl Handler<RenderAlert> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderAlert, _ctx: &mut Self::Context) -> Self::Result {
        self.logger.alert(msg.text);
    }
}

impl Handler<RenderNotification> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderNotification, _ctx: &mut Self::Context) -> Self::Result {
        println!(
            "{}",
            format!("🔔 {} — {}", msg.notification.title, msg.notification.body)
                .yellow()
                .bold()
        );
    }
}

impl Handler<RenderInfo> for UiHandler {
    type Result = ();

    fn handle(&mut self, msg: RenderInfo, _ctx: &mut Self::Context) -> Self::Result {
        println!("{}", msg.text.green());
    }
}
