use anyhow::bail;
use serde::Serialize;
use tabi_checklist::{CategoryGroup, Progress};

use crate::cli::{ChecklistCommands, GlobalFlags};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ChecklistResponse {
    progress: Progress,
    groups: Vec<CategoryGroup>,
}

#[derive(Debug, Serialize)]
struct ToggleResponse {
    id: String,
    checked: bool,
    progress: Progress,
}

/// Handle `tabi checklist`.
pub fn handle(
    action: &ChecklistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut checklist = ctx.checklist()?;

    match action {
        ChecklistCommands::Show => output(
            &ChecklistResponse {
                progress: checklist.progress(),
                groups: checklist.groups(),
            },
            flags.format,
        ),
        ChecklistCommands::Toggle { id } => {
            if !checklist.toggle(id) {
                bail!("no checklist item with id '{id}'");
            }
            let checked = checklist
                .items()
                .iter()
                .any(|item| item.id == *id && item.checked);
            output(
                &ToggleResponse {
                    id: id.clone(),
                    checked,
                    progress: checklist.progress(),
                },
                flags.format,
            )
        }
        ChecklistCommands::Reset => {
            checklist.reset();
            output(
                &ChecklistResponse {
                    progress: checklist.progress(),
                    groups: checklist.groups(),
                },
                flags.format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pretty_assertions::assert_eq;
    use tabi_config::TabiConfig;

    fn ctx_in(dir: &std::path::Path) -> AppContext {
        let mut config = TabiConfig::default();
        config.checklist.storage_dir = dir.display().to_string();
        AppContext::from_config(config).expect("context")
    }

    #[test]
    fn toggle_persists_through_context() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = ctx_in(tmp.path());
        let flags = GlobalFlags {
            format: OutputFormat::Raw,
        };

        handle(
            &ChecklistCommands::Toggle {
                id: "passport".into(),
            },
            &ctx,
            &flags,
        )
        .expect("toggle");

        let checklist = ctx.checklist().expect("checklist");
        assert_eq!(checklist.progress().checked, 1);
    }

    #[test]
    fn toggle_unknown_id_is_an_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ctx = ctx_in(tmp.path());
        let flags = GlobalFlags {
            format: OutputFormat::Raw,
        };

        let err = handle(
            &ChecklistCommands::Toggle { id: "nope".into() },
            &ctx,
            &flags,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
