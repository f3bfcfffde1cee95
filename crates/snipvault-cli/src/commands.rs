use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

use snipvault_core::models::snippet::{SaveTarget, Snippet, SnippetDraft, parse_tags};
use snipvault_core::models::theme::Theme;
use snipvault_export::json::{EXPORT_FILENAME, export_json, parse_import};
use snipvault_export::preview::preview_document;
use snipvault_export::render::{empty_message, render_page};
use snipvault_search::{filter, highlight};
use snipvault_storage::kv::FileStore;
use snipvault_storage::preferences::{load_app_state, save_app_state};
use snipvault_storage::snippets::SnippetStore;

use crate::cli::{Cli, CodeSource, Command, QueryArgs, ThemeAction};
use crate::clipboard::copy_to_clipboard;
use crate::config::{self, SnipvaultConfig};
use crate::prompt::confirm;

/// Run `cli` against the config in the user's config directory.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config_path = config::config_path()?;
    run_with(cli, &config_path, out).await
}

/// Run `cli` with the config file at `config_path`, writing command output
/// to `out`.
pub async fn run_with(cli: Cli, config_path: &Path, out: &mut impl Write) -> Result<()> {
    let config = config::load_config(config_path)?;
    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "using storage directory");

    let mut store = SnippetStore::open(FileStore::new(&data_dir));

    match cli.command {
        Command::Add {
            title,
            language,
            tags,
            description,
            code,
        } => {
            let code = read_code(&code)?.unwrap_or_default();
            let draft = SnippetDraft {
                title,
                language,
                tags: parse_tags(&tags),
                code,
                description,
            };
            let snippet = store.save(SaveTarget::Create, draft)?;
            writeln!(out, "Saved snippet {}", snippet.id)?;
        }
        Command::Edit {
            id,
            title,
            language,
            tags,
            description,
            code,
        } => {
            let existing = require(&store, &id)?;
            let mut draft = existing.to_draft();
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(language) = language {
                draft.language = language;
            }
            if let Some(tags) = tags {
                draft.tags = parse_tags(&tags);
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(code) = read_code(&code)? {
                draft.code = code;
            }
            let snippet = store.save(SaveTarget::Update(id), draft)?;
            writeln!(out, "Updated snippet {}", snippet.id)?;
        }
        Command::Delete { id, yes } => {
            if store.get(&id).is_none() {
                return Ok(());
            }
            if yes || confirm("Are you sure you want to delete this snippet?")? {
                store.delete(&id)?;
                writeln!(out, "Deleted snippet {id}")?;
            }
        }
        Command::List { query, html } => list(&store, &query, html, out)?,
        Command::Show { id } => {
            print_snippet(require(&store, &id)?, false, out)?;
        }
        Command::Copy { id } => {
            let snippet = require(&store, &id)?;
            match copy_to_clipboard(&snippet.code).await {
                Ok(_) => writeln!(out, "Code copied to clipboard!")?,
                Err(e) => {
                    tracing::error!(error = %e, "clipboard write failed");
                    return Err(e.wrap_err("Failed to copy code to clipboard"));
                }
            }
        }
        Command::Preview { id, out: path } => {
            let snippet = require(&store, &id)?;
            let document = preview_document(snippet)?;
            let path = path.unwrap_or_else(|| PathBuf::from(format!("preview-{id}.html")));
            write_file(&path, document).await?;
            writeln!(out, "Preview written to {}", path.display())?;
        }
        Command::Render { query, out: path } => {
            let theme = load_app_state(store.backend()).theme();
            let visible = filter(store.snippets(), &query.search, &query.language);
            let page = render_page(&visible, store.len(), theme)?;
            write_file(&path, &page).await?;
            writeln!(
                out,
                "Rendered {} snippet(s) to {}",
                visible.len(),
                path.display()
            )?;
        }
        Command::Export { out: path } => {
            let json = export_json(store.export_all())?;
            let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));
            write_file(&path, &json).await?;
            writeln!(out, "Exported {} snippet(s) to {}", store.len(), path.display())?;
        }
        Command::Import { file, yes } => import(&mut store, &file, yes, out).await?,
        Command::Theme { action } => {
            let backend = store.backend_mut();
            let mut state = load_app_state(&*backend);
            let changed = match action {
                None => false,
                Some(ThemeAction::Toggle) => {
                    state.toggle_theme();
                    true
                }
                Some(ThemeAction::Light) => state.set_theme(Theme::Light),
                Some(ThemeAction::Dark) => state.set_theme(Theme::Dark),
            };
            if changed {
                save_app_state(backend, &state)?;
            }
            writeln!(out, "{}", state.theme())?;
        }
        Command::Config { set_data_dir } => {
            show_or_update_config(config_path, config, set_data_dir, &data_dir, out)?
        }
    }

    Ok(())
}

/// Whether `err` comes from writing to a closed pipe, e.g. `snipvault list | head`.
pub fn is_broken_pipe(err: &eyre::Report) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == ErrorKind::BrokenPipe)
    })
}

fn require<'a>(store: &'a SnippetStore<FileStore>, id: &str) -> Result<&'a Snippet> {
    store
        .get(id)
        .ok_or_else(|| eyre::eyre!("no snippet with id {id}"))
}

/// Code from `--code`, `--file` or `--stdin`; `None` when no source was given.
fn read_code(source: &CodeSource) -> Result<Option<String>> {
    if let Some(code) = &source.code {
        return Ok(Some(code.clone()));
    }
    if let Some(path) = &source.file {
        let code = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        return Ok(Some(code));
    }
    if source.stdin {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .wrap_err("failed to read code from stdin")?;
        return Ok(Some(code));
    }
    Ok(None)
}

fn list(
    store: &SnippetStore<FileStore>,
    query: &QueryArgs,
    html: bool,
    out: &mut impl Write,
) -> Result<()> {
    let visible = filter(store.snippets(), &query.search, &query.language);
    if visible.is_empty() {
        writeln!(out, "{}", empty_message(store.len()))?;
        return Ok(());
    }
    for snippet in visible {
        print_snippet(snippet, html, out)?;
        writeln!(out)?;
    }
    Ok(())
}

fn print_snippet(snippet: &Snippet, html: bool, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{}  {} [{}]",
        snippet.id,
        snippet.title,
        snippet.language.to_uppercase()
    )?;
    if !snippet.tags.is_empty() {
        writeln!(out, "tags: {}", snippet.tags.join(", "))?;
    }
    if !snippet.description.is_empty() {
        writeln!(out, "{}", snippet.description)?;
    }
    writeln!(out, "updated {}", snippet.updated_at)?;
    writeln!(out, "---")?;
    if html {
        writeln!(out, "{}", highlight(&snippet.code, &snippet.language))
    } else {
        writeln!(out, "{}", snippet.code)
    }
}

async fn import(
    store: &mut SnippetStore<FileStore>,
    file: &Path,
    yes: bool,
    out: &mut impl Write,
) -> Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;
    let value = parse_import(&text).wrap_err("Error importing snippets")?;

    // Validate first so the prompt can show how many records will be added.
    let drafts = snipvault_core::import::validate_import(&value)
        .wrap_err("Error importing snippets")?;
    let question = format!(
        "Import {} snippet(s)? This will add them to your existing snippets.",
        drafts.len()
    );
    if !yes && !confirm(&question)? {
        return Ok(());
    }

    let added = store.import_batch(&value)?;
    writeln!(out, "Imported {added} snippet(s).")?;
    Ok(())
}

fn show_or_update_config(
    path: &Path,
    mut config: SnipvaultConfig,
    set_data_dir: Option<PathBuf>,
    data_dir: &Path,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        config::save_config(path, &config)?;
    }
    writeln!(out, "config:   {}", path.display())?;
    writeln!(
        out,
        "data dir: {}",
        config.data_dir.as_deref().unwrap_or(data_dir).display()
    )?;
    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .wrap_err_with(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe_is_found_under_context() {
        let err = eyre::Report::new(std::io::Error::from(ErrorKind::BrokenPipe))
            .wrap_err("listing snippets");
        assert!(is_broken_pipe(&err));

        let other = eyre::Report::new(std::io::Error::from(ErrorKind::NotFound));
        assert!(!is_broken_pipe(&other));
    }

    #[test]
    fn no_code_source_means_keep_existing() {
        let source = CodeSource {
            code: None,
            file: None,
            stdin: false,
        };
        assert_eq!(read_code(&source).unwrap(), None);
    }
}
