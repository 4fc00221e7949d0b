use super::theme::Palette;
use runlog_core::{RunEntry, config::DEFAULT_DATE_FORMAT};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub short_mode: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Palette::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: DEFAULT_DATE_FORMAT.to_string(),
                    use_color: true,
                    short_mode: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", message.with(Palette::RED));
        } else {
            eprintln!("{message}");
        }
    }

    /// One line per run: date, time, distance, pace and title.
    pub fn print_run_line(&self, run: &RunEntry) {
        let mut date = run.date().format(&self.opts.date_format).to_string();
        let mut time = run.elapsed_time().to_string();
        let mut distance = format!("{:.2}", run.distance());
        let mut pace = format!("{}/unit", run.pace());
        let mut title = run.title().unwrap_or_default().to_string();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            distance = distance.with(Color::Green).to_string();
            pace = pace.with(Color::Magenta).to_string();
            title = title.with(Color::Yellow).to_string();
        }
        println!("{date} {time} {distance} {pace} {title}");
    }

    pub fn print_run(&self, run: &RunEntry) {
        if self.opts.short_mode {
            self.print_run_line(run);
            return;
        }
        self.print_md(&self.run_markdown(run));
    }

    pub fn print_runs(&self, runs: &[RunEntry]) {
        if runs.is_empty() {
            self.print_info("No runs found.");
            return;
        }

        for (i, run) in runs.iter().enumerate() {
            self.print_run(run);
            if !self.opts.short_mode && i + 1 < runs.len() {
                self.print_md("---");
            }
        }
    }

    fn run_markdown(&self, run: &RunEntry) -> String {
        let date = run.date().format(&self.opts.date_format);
        let mut md = match run.title() {
            Some(title) => format!("## {date} - {}\n", title.trim()),
            None => format!("## {date}\n"),
        };
        md.push_str(&format!("* Time: `{}`\n", run.elapsed_time()));
        md.push_str(&format!("* Distance: `{:.2}`\n", run.distance()));
        md.push_str(&format!("* Pace: `{}`\n", run.pace()));
        if let Some(location) = run.location() {
            md.push_str(&format!("* Location: {location}\n"));
        }
        if run.rating() > 0 {
            md.push_str(&format!("* Rating: {}/10\n", run.rating()));
        }
        if let Some(description) = run.description().filter(|d| !d.trim().is_empty()) {
            md.push_str(&format!("\n{}\n", description.trim_end()));
        }
        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Renderer {
        Renderer::new(Some(RenderOptions {
            date_format: "%Y-%m-%d".to_string(),
            use_color: false,
            short_mode: false,
        }))
    }

    #[test]
    fn markdown_lists_required_fields() {
        let run = RunEntry::new(4.13, "42:14", Some("2024-11-26")).unwrap();
        let md = plain().run_markdown(&run);
        assert_eq!(
            md,
            "## 2024-11-26\n* Time: `00:42:14`\n* Distance: `4.13`\n* Pace: `10:14`\n"
        );
    }

    #[test]
    fn markdown_includes_optional_fields_when_set() {
        let mut run = RunEntry::new(6.0, "30:00", Some("2024-11-26")).unwrap();
        run.set_title("Long run ");
        run.set_location("Riverside");
        run.set_rating(8).unwrap();
        run.set_description("Felt easy.\n");
        let md = plain().run_markdown(&run);
        assert!(md.starts_with("## 2024-11-26 - Long run\n"));
        assert!(md.contains("* Location: Riverside\n"));
        assert!(md.contains("* Rating: 8/10\n"));
        assert!(md.ends_with("\nFelt easy.\n"));
    }
}
