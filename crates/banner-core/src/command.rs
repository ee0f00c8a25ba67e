use std::collections::HashMap;

use banner_presets::PresetCatalog;

use crate::bus::EventBus;
use crate::console::Console;
use crate::event::Event;
use crate::fields::{TextField, Toggle};
use crate::state::AppState;

/// Output from a command execution.
pub enum CommandOutput {
    /// Lines to display in the console.
    Lines(Vec<String>),
    /// Signal that the app should quit.
    Quit,
}

/// Context available to commands during execution.
pub struct CommandContext<'a> {
    pub state: &'a mut AppState,
    pub console: &'a mut Console,
    pub bus: &'a mut EventBus,
    pub catalog: &'a PresetCatalog,
}

/// A console command.
pub trait Command: Send + Sync {
    fn name(&self) -> &str;
    fn aliases(&self) -> &[&str] { &[] }
    fn description(&self) -> &str;
    fn usage(&self) -> &str { self.name() }
    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput;
}

/// Registry of console commands.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    lookup: HashMap<String, usize>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let idx = self.commands.len();
        self.lookup.insert(cmd.name().to_string(), idx);
        for alias in cmd.aliases() {
            self.lookup.insert(alias.to_string(), idx);
        }
        self.commands.push(cmd);
    }

    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandOutput {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return CommandOutput::Lines(vec![]);
        }

        let name = parts[0];
        let args = &parts[1..];

        match self.lookup.get(name) {
            Some(&idx) => self.commands[idx].execute(args, ctx),
            None => CommandOutput::Lines(vec![format!(
                "unknown command: '{}'. Type 'help' for available commands.",
                name
            )]),
        }
    }

    pub fn commands(&self) -> &[Box<dyn Command>] {
        &self.commands
    }
}

// ── Built-in commands ──

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str { "help" }
    fn aliases(&self) -> &[&str] { &["?"] }
    fn description(&self) -> &str { "List commands" }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        // The full help list is injected by the caller, which owns the registry.
        CommandOutput::Lines(vec!["Type 'help' to list all commands.".into()])
    }
}

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str { "clear" }
    fn aliases(&self) -> &[&str] { &["cls"] }
    fn description(&self) -> &str { "Clear console log" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        ctx.console.clear_logs();
        CommandOutput::Lines(vec![])
    }
}

pub struct PresetsCommand;

impl Command for PresetsCommand {
    fn name(&self) -> &str { "presets" }
    fn description(&self) -> &str { "List available presets" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let active = ctx.catalog.lookup(&ctx.state.preset_id).id.clone();
        let lines = ctx
            .catalog
            .presets()
            .iter()
            .map(|p| {
                let marker = if p.id == active { " *" } else { "" };
                format!("  {:18} {}{}", p.id, p.name, marker)
            })
            .collect();
        CommandOutput::Lines(lines)
    }
}

pub struct PresetCommand;

impl Command for PresetCommand {
    fn name(&self) -> &str { "preset" }
    fn aliases(&self) -> &[&str] { &["p"] }
    fn description(&self) -> &str { "Select the active preset" }
    fn usage(&self) -> &str { "preset <id>" }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        if args.is_empty() {
            return CommandOutput::Lines(vec!["usage: preset <id>".into()]);
        }
        // Lookup never fails: unknown ids resolve to the default preset.
        let preset = ctx.catalog.lookup(args[0]);
        let resolved = preset.id.clone();
        let name = preset.name.clone();
        ctx.state.preset_id = resolved.clone();
        ctx.bus.publish(Event::PresetSelected { id: resolved.clone() });
        let mut lines = vec![format!("Preset: {} ({})", name, resolved)];
        if resolved != args[0] {
            lines.push(format!("'{}' not in catalog; using default", args[0]));
        }
        CommandOutput::Lines(lines)
    }
}

pub struct SetCommand;

impl Command for SetCommand {
    fn name(&self) -> &str { "set" }
    fn description(&self) -> &str { "Set a text field" }
    fn usage(&self) -> &str { "set <field> <text>" }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let Some(&key) = args.first() else {
            return CommandOutput::Lines(vec!["usage: set <field> <text>".into()]);
        };
        let Some(field) = TextField::from_key(key) else {
            return CommandOutput::Lines(vec![format!(
                "unknown field: '{}' (one of: {})",
                key,
                TextField::ALL.map(TextField::key).join(", ")
            )]);
        };
        let value = args[1..].join(" ");
        *ctx.state.fields.text_mut(field) = value.clone();
        ctx.bus.publish(Event::FieldEdited { field });
        CommandOutput::Lines(vec![format!("{} = {:?}", field.key(), value)])
    }
}

pub struct ToggleCommand;

impl Command for ToggleCommand {
    fn name(&self) -> &str { "toggle" }
    fn aliases(&self) -> &[&str] { &["t"] }
    fn description(&self) -> &str { "Flip a visibility flag" }
    fn usage(&self) -> &str { "toggle <flag>" }

    fn execute(&self, args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let Some(&key) = args.first() else {
            return CommandOutput::Lines(vec!["usage: toggle <flag>".into()]);
        };
        let Some(flag) = Toggle::from_key(key) else {
            return CommandOutput::Lines(vec![format!(
                "unknown flag: '{}' (one of: {})",
                key,
                Toggle::ALL.map(Toggle::key).join(", ")
            )]);
        };
        let visible = ctx.state.fields.toggle(flag);
        ctx.bus.publish(Event::VisibilityToggled { flag, visible });
        CommandOutput::Lines(vec![format!(
            "{}: {}",
            flag.key(),
            if visible { "shown" } else { "hidden" }
        )])
    }
}

pub struct ResetCommand;

impl Command for ResetCommand {
    fn name(&self) -> &str { "reset" }
    fn description(&self) -> &str { "Restore the default field set" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        ctx.state.fields.reset();
        ctx.bus.publish(Event::FieldsReset);
        CommandOutput::Lines(vec!["Fields reset to defaults.".into()])
    }
}

pub struct ExportCommand;

impl Command for ExportCommand {
    fn name(&self) -> &str { "export" }
    fn aliases(&self) -> &[&str] { &["png"] }
    fn description(&self) -> &str { "Export the banner as a PNG" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        if ctx.state.is_exporting() {
            return CommandOutput::Lines(vec!["export already in flight".into()]);
        }
        ctx.bus.publish(Event::ExportRequested);
        CommandOutput::Lines(vec![])
    }
}

pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &str { "uptime" }
    fn description(&self) -> &str { "Show session uptime" }

    fn execute(&self, _args: &[&str], ctx: &mut CommandContext) -> CommandOutput {
        let secs = ctx.state.uptime().as_secs();
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        let s = secs % 60;
        CommandOutput::Lines(vec![format!("Uptime: {:02}:{:02}:{:02}", hours, mins, s)])
    }
}

pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str { "quit" }
    fn aliases(&self) -> &[&str] { &["exit", "q"] }
    fn description(&self) -> &str { "Exit Banner Studio" }

    fn execute(&self, _args: &[&str], _ctx: &mut CommandContext) -> CommandOutput {
        CommandOutput::Quit
    }
}

/// Create a CommandRegistry pre-loaded with all built-in commands.
pub fn builtin_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    reg.register(Box::new(HelpCommand));
    reg.register(Box::new(ClearCommand));
    reg.register(Box::new(PresetsCommand));
    reg.register(Box::new(PresetCommand));
    reg.register(Box::new(SetCommand));
    reg.register(Box::new(ToggleCommand));
    reg.register(Box::new(ResetCommand));
    reg.register(Box::new(ExportCommand));
    reg.register(Box::new(UptimeCommand));
    reg.register(Box::new(QuitCommand));
    reg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldSet;

    struct Parts {
        state: AppState,
        console: Console,
        bus: EventBus,
        catalog: PresetCatalog,
    }

    fn make_parts() -> Parts {
        let catalog = PresetCatalog::load().unwrap();
        let state = AppState::new(catalog.default_preset().id.clone());
        Parts {
            state,
            console: Console::default(),
            bus: EventBus::new(),
            catalog,
        }
    }

    fn ctx_from(parts: &mut Parts) -> CommandContext<'_> {
        CommandContext {
            state: &mut parts.state,
            console: &mut parts.console,
            bus: &mut parts.bus,
            catalog: &parts.catalog,
        }
    }

    fn lines(output: CommandOutput) -> Vec<String> {
        match output {
            CommandOutput::Lines(lines) => lines,
            CommandOutput::Quit => panic!("expected Lines"),
        }
    }

    #[test]
    fn empty_input_returns_empty() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        assert!(lines(reg.execute("", &mut ctx)).is_empty());
    }

    #[test]
    fn unknown_command_reports_error() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("frobnicate", &mut ctx));
        assert!(out[0].contains("unknown command"));
    }

    #[test]
    fn preset_command_selects_and_publishes() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("preset stone-ink", &mut ctx));
        assert!(out[0].contains("Stone Ink"));
        assert_eq!(parts.state.preset_id, "stone-ink");
        let events = parts.bus.drain();
        assert!(matches!(&events[0], Event::PresetSelected { id } if id == "stone-ink"));
    }

    #[test]
    fn preset_command_unknown_id_falls_back() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let default_id = parts.catalog.default_preset().id.clone();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("preset nope", &mut ctx));
        assert!(out[1].contains("using default"));
        assert_eq!(parts.state.preset_id, default_id);
    }

    #[test]
    fn presets_command_lists_all_and_marks_active() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let count = parts.catalog.len();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("presets", &mut ctx));
        assert_eq!(out.len(), count);
        assert!(out[0].contains('*'), "first entry is the active default");
    }

    #[test]
    fn set_command_patches_field() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        lines(reg.execute("set company Acme Rocket Co", &mut ctx));
        assert_eq!(parts.state.fields.company, "Acme Rocket Co");
        let events = parts.bus.drain();
        assert!(matches!(
            &events[0],
            Event::FieldEdited { field: TextField::Company }
        ));
    }

    #[test]
    fn set_command_unknown_field() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("set footer x", &mut ctx));
        assert!(out[0].contains("unknown field"));
    }

    #[test]
    fn toggle_command_flips_flag() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("toggle phone", &mut ctx));
        assert!(out[0].contains("shown"));
        assert!(parts.state.fields.show_phone);
    }

    #[test]
    fn reset_command_restores_defaults() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        parts.state.fields.name = "Edited".into();
        let mut ctx = ctx_from(&mut parts);
        lines(reg.execute("reset", &mut ctx));
        assert_eq!(parts.state.fields, FieldSet::default());
        let events = parts.bus.drain();
        assert!(matches!(&events[0], Event::FieldsReset));
    }

    #[test]
    fn export_command_publishes_request_once() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        lines(reg.execute("export", &mut ctx));
        let events = parts.bus.drain();
        assert!(matches!(&events[0], Event::ExportRequested));

        // While busy, the command refuses instead of publishing.
        parts.state.begin_export();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("export", &mut ctx));
        assert!(out[0].contains("in flight"));
        assert!(!parts.bus.has_pending());
    }

    #[test]
    fn quit_command_signals_quit() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        assert!(matches!(reg.execute("quit", &mut ctx), CommandOutput::Quit));
        let mut ctx = ctx_from(&mut parts);
        assert!(matches!(reg.execute("q", &mut ctx), CommandOutput::Quit));
    }

    #[test]
    fn uptime_command_formats_clock() {
        let reg = builtin_registry();
        let mut parts = make_parts();
        let mut ctx = ctx_from(&mut parts);
        let out = lines(reg.execute("uptime", &mut ctx));
        assert!(out[0].starts_with("Uptime:"));
    }
}
