use crate::domain::models::{
    CheckReport, LayoutReport, PresetReport, ResolvedItem, SpinReport, TrapOutcome, Wedge,
    WinnerReport,
};
use crate::services::controller::Frame;
use crate::services::output::TextRender;

const BAR_WIDTH: usize = 40;

/// Horizontal bar proportional to a share of 100.
pub fn share_bar(share: f64) -> String {
    let filled = ((share / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

pub fn frame_line(frame: &Frame, items: &[ResolvedItem]) -> String {
    let name = items
        .get(frame.under_pointer)
        .map(|i| i.name.as_str())
        .unwrap_or("?");
    format!(
        "> {:<24} angle {:>7.2}  speed {:>6.2}",
        name, frame.angle, frame.speed
    )
}

/// Prints whole percentages without decimals and everything else with two.
pub fn format_share(share: f64) -> String {
    if (share - share.round()).abs() < 1e-9 {
        format!("{}%", share.round() as i64)
    } else {
        format!("{:.2}%", share)
    }
}

pub fn outcome_line(outcome: &TrapOutcome) -> String {
    match outcome {
        TrapOutcome::Released => "outcome: released".to_string(),
        TrapOutcome::Redirected { url } => format!("outcome: redirect {}", url),
    }
}

impl TextRender for ResolvedItem {
    fn text(&self) -> String {
        format!("{}\t{}\t{}", self.name, format_share(self.share), share_bar(self.share))
    }
}

impl TextRender for Wedge {
    fn text(&self) -> String {
        format!(
            "{}\t{}\t{:.2}..{:.2}\t{}",
            self.index,
            self.name,
            self.start_deg,
            self.end_deg,
            format_share(self.share)
        )
    }
}

impl TextRender for LayoutReport {
    fn text(&self) -> String {
        self.wedges
            .iter()
            .map(TextRender::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextRender for WinnerReport {
    fn text(&self) -> String {
        self.name.clone()
    }
}

impl TextRender for SpinReport {
    fn text(&self) -> String {
        let mut out = format!(
            "winner: {}\nangle: {:.2}\tticks: {}\tpreset: {}",
            self.winner, self.final_angle, self.ticks, self.preset
        );
        if let Some(outcome) = &self.trap_outcome {
            out.push('\n');
            out.push_str(&outcome_line(outcome));
        }
        out
    }
}

impl TextRender for PresetReport {
    fn text(&self) -> String {
        let wheel = match &self.items {
            Some(items) => items
                .iter()
                .map(|i| format!("{} {}", i.name, format_share(i.share)))
                .collect::<Vec<_>>()
                .join(", "),
            None => "(from input)".to_string(),
        };
        format!("{}\t{}", self.name, wheel)
    }
}

impl TextRender for CheckReport {
    fn text(&self) -> String {
        format!(
            "wheel valid: {} items from {} entries ({} preset, id {})",
            self.item_count, self.entry_count, self.preset, self.wheel_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_format_compactly() {
        assert_eq!(format_share(50.0), "50%");
        assert_eq!(format_share(100.0 / 3.0), "33.33%");
    }

    #[test]
    fn bar_is_fixed_width() {
        assert_eq!(share_bar(0.0), ".".repeat(40));
        assert_eq!(share_bar(100.0), "#".repeat(40));
        assert_eq!(share_bar(25.0).matches('#').count(), 10);
    }

    #[test]
    fn frame_line_names_the_item_under_pointer() {
        let items = vec![ResolvedItem::new("A", 60.0), ResolvedItem::new("B", 40.0)];
        let frame = Frame {
            tick: 3,
            angle: 12.5,
            speed: 4.0,
            under_pointer: 1,
            stopped: false,
        };
        let line = frame_line(&frame, &items);
        assert!(line.starts_with("> B"));
        assert!(line.contains("12.50"));
    }

    fn spin_report(trap_outcome: Option<TrapOutcome>) -> SpinReport {
        SpinReport {
            preset: "trap".to_string(),
            wheel_id: "0123456789ab".to_string(),
            policy: "decay".to_string(),
            seed: Some(3),
            start_angle: 12.0,
            initial_speed: 50.0,
            final_angle: 91.2,
            ticks: 420,
            winner_index: 0,
            winner: "Doom".to_string(),
            trap_outcome,
        }
    }

    #[test]
    fn spin_text_adds_trap_outcome_line() {
        let plain = spin_report(None).text();
        assert_eq!(plain, "winner: Doom\nangle: 91.20\tticks: 420\tpreset: trap");

        let redirected = spin_report(Some(TrapOutcome::Redirected {
            url: "https://example.invalid/x".to_string(),
        }))
        .text();
        assert!(redirected.ends_with("\noutcome: redirect https://example.invalid/x"));
        assert!(spin_report(Some(TrapOutcome::Released))
            .text()
            .ends_with("outcome: released"));
    }

    #[test]
    fn preset_text_lists_fixed_wheel_or_input_marker() {
        let fixed = PresetReport {
            name: "trap".to_string(),
            auto_start: true,
            items: Some(vec![
                ResolvedItem::new("Doom", 80.0),
                ResolvedItem::new("Escape", 20.0),
            ]),
        };
        assert_eq!(fixed.text(), "trap\tDoom 80%, Escape 20%");
        let open = PresetReport {
            name: "standard".to_string(),
            auto_start: false,
            items: None,
        };
        assert_eq!(open.text(), "standard\t(from input)");
    }
}
