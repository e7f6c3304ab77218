use crate::script::{parse_script, ScriptCommand, ScriptLine};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use strata_editor::{ComponentRegistry, EditSession, EditorConfig, EditorError};
use tracing::debug;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Script file to execute
    pub script: PathBuf,

    /// Config file (defaults to strata.config.json in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RunArgs, cwd: &Path) -> Result<()> {
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::load_or_default(cwd)?,
    };

    let source = fs::read_to_string(&args.script)
        .map_err(|e| anyhow!("Cannot read {}: {}", args.script.display(), e))?;
    let script = parse_script(&source)?;

    println!(
        "{} {}",
        "▶ Running".bright_blue().bold(),
        args.script.display()
    );

    let registry = config.registry();
    let mut session = EditSession::new(config);

    for line in &script {
        step(&mut session, &registry, line)?;
    }

    println!();
    println!("{}", "Final document:".bright_white().bold());
    print_document(&session, &registry);

    Ok(())
}

/// Execute one script line against the session
fn step(
    session: &mut EditSession,
    registry: &ComponentRegistry,
    line: &ScriptLine,
) -> Result<()> {
    debug!(line = line.line, command = ?line.command, "Running script line");

    let outcome = match &line.command {
        ScriptCommand::Append => {
            let block_id = session.append_block();
            Ok(format!("appended block {}", block_id))
        }
        ScriptCommand::Add { index } => session
            .add_block_after(*index)
            .map(|block_id| format!("added block {} after {}", block_id, index)),
        ScriptCommand::Edit { block_id, content } => session
            .update_block_content(*block_id, content.as_str())
            .map(|_| format!("edited block {}", block_id)),
        ScriptCommand::Component {
            block_id,
            component_type,
        } => session
            .insert_component(*block_id, component_type.as_str())
            .map(|new_id| format!("inserted {} as block {}", component_type, new_id)),
        ScriptCommand::Delete { block_id } => session
            .delete_block(*block_id)
            .map(|_| format!("deleted block {}", block_id)),
        ScriptCommand::Undo => return travel(session.undo().map(|_| ()), "undo", line.line),
        ScriptCommand::Redo => return travel(session.redo().map(|_| ()), "redo", line.line),
        ScriptCommand::Show => {
            print_document(session, registry);
            return Ok(());
        }
    };

    match outcome {
        Ok(message) => {
            println!("  {} {}", "✓".green(), message);
            Ok(())
        }
        Err(e) => Err(anyhow!("line {}: {}", line.line, e)),
    }
}

/// Undo/redo past the end of history is reported, not fatal
fn travel(result: Result<(), EditorError>, name: &str, line: usize) -> Result<()> {
    match result {
        Ok(()) => {
            println!("  {} {}", "↺".cyan(), name);
            Ok(())
        }
        Err(EditorError::History(e)) => {
            println!("  {} {}", "⚠️".yellow(), e);
            Ok(())
        }
        Err(e) => Err(anyhow!("line {}: {}", line, e)),
    }
}

fn print_document(session: &EditSession, registry: &ComponentRegistry) {
    for (index, block) in session.document().blocks().enumerate() {
        println!(
            "  [{}] {} {}",
            index,
            format!("#{}", block.id).dimmed(),
            registry.render_block(block)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_source(source: &str, config: EditorConfig) -> Result<EditSession> {
        let registry = config.registry();
        let mut session = EditSession::new(config);
        for line in parse_script(source)? {
            step(&mut session, &registry, &line)?;
        }
        Ok(session)
    }

    fn rendered(session: &EditSession) -> Vec<String> {
        session.render(&ComponentRegistry::builtin())
    }

    #[test]
    fn test_script_walkthrough() {
        let source = "\
# build a small document
edit 0 Title
add 0
edit 1 /
component 1 Component1
append
edit 3 Footer
show
";
        let session = run_source(source, EditorConfig::default()).unwrap();
        assert_eq!(
            rendered(&session),
            vec!["Title", "📊 Chart Component", "Footer"]
        );
    }

    #[test]
    fn test_undo_at_boundary_continues() {
        let source = "undo\nedit 0 after\nredo\nundo\nundo";
        let session = run_source(source, EditorConfig::default()).unwrap();

        assert!(session.document().get(0).unwrap().is_empty_text());
        assert!(session.can_redo());
    }

    #[test]
    fn test_editor_error_aborts_with_line() {
        let err = run_source("edit 0 ok\n\ndelete 0", EditorConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "line 3: Cannot delete the last block");

        let err = run_source("edit 42 missing", EditorConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: Block not found: 42");
    }

    #[test]
    fn test_run_reads_script_and_config() {
        let dir = std::env::temp_dir().join(format!("strata-run-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let script = dir.join("doc.strata");
        fs::write(&script, "delete 0\nappend\nshow\n").unwrap();
        let config = dir.join("custom.json");
        fs::write(&config, r#"{ "allowEmptyDocument": true }"#).unwrap();

        let args = RunArgs {
            script: script.clone(),
            config: Some(config),
        };
        assert!(run(args, &dir).is_ok());

        let missing = RunArgs {
            script: dir.join("nope.strata"),
            config: None,
        };
        assert!(run(missing, &dir).is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
