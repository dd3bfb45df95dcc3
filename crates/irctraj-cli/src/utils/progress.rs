use indicatif::{ProgressBar, ProgressState, ProgressStyle};

/// A stderr progress bar for a batch of independent files.
pub fn batch_bar(total: u64, message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(total)
        .with_style(bar_style())
        .with_message(message);
    bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    bar
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .expect("Failed to create bar style template")
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                write!(w, "{:.1}s", state.eta().as_secs_f64()).unwrap()
            },
        )
        .progress_chars("##-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_bar_starts_at_zero() {
        let bar = batch_bar(10, "testing");
        assert_eq!(bar.position(), 0);
        assert_eq!(bar.length(), Some(10));
        assert!(!bar.is_finished());
    }

    #[test]
    fn batch_bar_counts_to_completion() {
        let bar = batch_bar(3, "testing");
        for _ in 0..3 {
            bar.inc(1);
        }
        assert_eq!(bar.position(), 3);
        bar.finish();
        assert!(bar.is_finished());
    }
}
