use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use snipvault_cli::cli::Cli;
use snipvault_cli::commands::run_with;
use snipvault_core::models::theme::Theme;
use snipvault_storage::kv::FileStore;
use snipvault_storage::preferences::load_app_state;
use snipvault_storage::snippets::SnippetStore;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.json")
    }

    /// Run `snipvault --data-dir <tmp> <args..>` and return what it printed.
    async fn run(&self, args: &[&str]) -> eyre::Result<String> {
        let data_dir = self.data_dir();
        let mut argv = vec!["snipvault", "--data-dir", data_dir.to_str().unwrap()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;

        let mut out = Vec::new();
        run_with(cli, &self.config_path(), &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn store(&self) -> SnippetStore<FileStore> {
        SnippetStore::open(FileStore::new(self.data_dir()))
    }

    /// Add a snippet and return its id.
    async fn add(&self, title: &str, language: &str, code: &str) -> String {
        let printed = self
            .run(&[
                "add",
                "--title",
                title,
                "--language",
                language,
                "--tags",
                "demo, cli",
                "--description",
                "kept as is",
                "--code",
                code,
            ])
            .await
            .unwrap();
        printed
            .trim()
            .strip_prefix("Saved snippet ")
            .unwrap()
            .to_string()
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[tokio::test]
async fn add_then_list_shows_the_snippet() {
    let ws = Workspace::new();
    let id = ws.add("Loop", "javascript", "for(;;){}").await;

    let listing = ws.run(&["list"]).await.unwrap();
    assert!(listing.contains(&format!("{id}  Loop [JAVASCRIPT]")));
    assert!(listing.contains("tags: demo, cli"));
    assert!(listing.contains("for(;;){}"));

    let filtered = ws.run(&["list", "-l", "css"]).await.unwrap();
    assert_eq!(
        filtered.trim(),
        "No snippets found. Try adjusting your search or filter."
    );
}

#[tokio::test]
async fn list_of_empty_store_invites_first_snippet() {
    let ws = Workspace::new();
    let listing = ws.run(&["list"]).await.unwrap();
    assert_eq!(
        listing.trim(),
        "No snippets found. Add your first code snippet!"
    );
}

#[tokio::test]
async fn edit_keeps_fields_that_were_not_given() {
    let ws = Workspace::new();
    let id = ws.add("Loop", "javascript", "for(;;){}").await;

    ws.run(&["edit", &id, "--title", "Renamed"]).await.unwrap();

    let store = ws.store();
    let snippet = store.get(&id).unwrap();
    assert_eq!(snippet.title, "Renamed");
    assert_eq!(snippet.code, "for(;;){}");
    assert_eq!(snippet.language, "javascript");
    assert_eq!(snippet.tags, vec!["demo", "cli"]);
    assert_eq!(snippet.description, "kept as is");
}

#[tokio::test]
async fn edit_replaces_code_from_a_file() {
    let ws = Workspace::new();
    let id = ws.add("Style", "css", "a{}").await;
    let file = ws.write("new.css", "b { color: red; }");

    ws.run(&["edit", &id, "--file", path_arg(&file)])
        .await
        .unwrap();

    assert_eq!(ws.store().get(&id).unwrap().code, "b { color: red; }");
}

#[tokio::test]
async fn delete_of_missing_id_is_silent() {
    let ws = Workspace::new();
    ws.add("Loop", "javascript", "for(;;){}").await;

    let printed = ws.run(&["delete", "no-such-id", "--yes"]).await.unwrap();

    assert!(printed.is_empty());
    assert_eq!(ws.store().len(), 1);
}

#[tokio::test]
async fn delete_with_yes_removes_the_snippet() {
    let ws = Workspace::new();
    let id = ws.add("Loop", "javascript", "for(;;){}").await;

    ws.run(&["delete", &id, "--yes"]).await.unwrap();

    assert!(ws.store().is_empty());
}

#[tokio::test]
async fn import_of_non_array_fails_without_changes() {
    let ws = Workspace::new();
    let id = ws.add("Loop", "javascript", "for(;;){}").await;
    let file = ws.write("bad.json", r#"{"title": "x", "language": "css", "code": "a{}"}"#);

    let err = ws
        .run(&["import", path_arg(&file), "--yes"])
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("Error importing snippets"));
    let store = ws.store();
    assert_eq!(store.len(), 1);
    assert!(store.get(&id).is_some());
}

#[tokio::test]
async fn export_then_import_appends_copies() {
    let ws = Workspace::new();
    ws.add("Loop", "javascript", "for(;;){}").await;
    let export = ws.dir.path().join("out.json");

    ws.run(&["export", "--out", path_arg(&export)])
        .await
        .unwrap();
    let printed = ws
        .run(&["import", path_arg(&export), "--yes"])
        .await
        .unwrap();

    assert_eq!(printed.trim(), "Imported 1 snippet(s).");
    let store = ws.store();
    assert_eq!(store.len(), 2);
    assert_ne!(store.snippets()[0].id, store.snippets()[1].id);
}

#[tokio::test]
async fn theme_toggle_persists() {
    let ws = Workspace::new();

    assert_eq!(ws.run(&["theme"]).await.unwrap().trim(), "light");
    assert_eq!(ws.run(&["theme", "toggle"]).await.unwrap().trim(), "dark");
    assert_eq!(
        load_app_state(&FileStore::new(ws.data_dir())).theme(),
        Theme::Dark
    );
    assert_eq!(ws.run(&["theme"]).await.unwrap().trim(), "dark");
    assert_eq!(ws.run(&["theme", "toggle"]).await.unwrap().trim(), "light");
}

#[tokio::test]
async fn render_writes_a_page_with_the_stored_theme() {
    let ws = Workspace::new();
    ws.add("Box", "css", "p { color: red; }").await;
    ws.run(&["theme", "dark"]).await.unwrap();
    let page = ws.dir.path().join("page.html");

    ws.run(&["render", "--out", path_arg(&page)])
        .await
        .unwrap();

    let html = std::fs::read_to_string(&page).unwrap();
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("<span class=\"code-property\">color</span>"));
}
