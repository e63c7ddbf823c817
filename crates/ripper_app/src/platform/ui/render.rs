use ripper_core::AppViewModel;

use super::constants::PROGRESS_RANGE;
use super::UiCommand;

/// Commands that bring a terminal showing `previous` up to date with `view`.
///
/// Output lines already printed cannot be taken back, so a shrunk or
/// rewritten log is reported as a clear followed by the full new log.
pub fn render(previous: &AppViewModel, view: &AppViewModel) -> Vec<UiCommand> {
    let mut cmds = Vec::new();

    if view.progress != previous.progress {
        cmds.push(UiCommand::SetProgress {
            position: progress_position(view.progress),
        });
    }

    if view.status != previous.status {
        cmds.push(UiCommand::SetStatus(view.status.clone()));
    }

    if view.trigger_enabled != previous.trigger_enabled {
        cmds.push(UiCommand::SetTriggerEnabled(view.trigger_enabled));
    }

    let old = &previous.output_lines;
    let new = &view.output_lines;
    let appended = new.len() >= old.len() && new[..old.len()] == old[..];
    let fresh = if appended {
        &new[old.len()..]
    } else {
        cmds.push(UiCommand::ClearOutput);
        &new[..]
    };
    cmds.extend(fresh.iter().cloned().map(UiCommand::AppendOutput));

    cmds
}

fn progress_position(fraction: f64) -> u64 {
    (fraction.clamp(0.0, 1.0) * PROGRESS_RANGE as f64).round() as u64
}
