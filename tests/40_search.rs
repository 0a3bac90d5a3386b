mod common;

use anyhow::Result;
use reqwest::StatusCode;

use notes_dashboard::database::MemoryNoteStore;

fn titles(body: &serde_json::Value) -> Vec<String> {
    body["data"]["search_results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap().to_string())
        .collect()
}

async fn search(server: &common::TestServer, user: &common::TestUser, term: &str) -> Result<serde_json::Value> {
    let res = server
        .post_form(user, "/dashboard/search", &[("searchTerm", term)])
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(res.json().await?)
}

#[tokio::test]
async fn search_page_starts_empty() -> Result<()> {
    let (server, _store) = common::spawn_server().await?;
    let user = common::TestUser::new("Ada");

    let body = server.json(&user, "/dashboard/search").await?;
    assert_eq!(body["data"]["search_results"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn special_characters_are_stripped() -> Result<()> {
    let user = common::TestUser::new("Ada");
    let (server, _store) = common::spawn_with_memory(MemoryNoteStore::with_notes(vec![
        common::note_at(user.id, "foo bar", "x", 1),
        common::note_at(user.id, "baz", "x", 2),
    ]))
    .await?;

    let plain = search(&server, &user, "foo").await?;
    let noisy = search(&server, &user, "foo!@#").await?;
    assert_eq!(titles(&plain), vec!["foo bar"]);
    assert_eq!(titles(&noisy), titles(&plain));

    // Regex metacharacters are data, not patterns
    let dotted = search(&server, &user, "o.b").await?;
    assert!(titles(&dotted).is_empty());
    Ok(())
}

#[tokio::test]
async fn matching_is_case_insensitive_on_title_or_body() -> Result<()> {
    let user = common::TestUser::new("Ada");
    let (server, _store) = common::spawn_with_memory(MemoryNoteStore::with_notes(vec![
        common::note_at(user.id, "Meeting NOTES", "agenda", 1),
        common::note_at(user.id, "misc", "remember the notes app", 2),
        common::note_at(user.id, "shopping", "bread", 3),
    ]))
    .await?;

    let body = search(&server, &user, "nOtEs").await?;
    assert_eq!(titles(&body), vec!["misc", "Meeting NOTES"]);
    Ok(())
}

#[tokio::test]
async fn search_is_scoped_to_the_requesting_user() -> Result<()> {
    let alice = common::TestUser::new("Alice");
    let bob = common::TestUser::new("Bob");
    let (server, _store) = common::spawn_with_memory(MemoryNoteStore::with_notes(vec![
        common::note_at(alice.id, "alice plans", "x", 1),
        common::note_at(bob.id, "bob plans", "x", 2),
    ]))
    .await?;

    assert_eq!(titles(&search(&server, &alice, "plans").await?), vec!["alice plans"]);
    assert_eq!(titles(&search(&server, &bob, "plans").await?), vec!["bob plans"]);
    Ok(())
}

#[tokio::test]
async fn term_of_only_symbols_matches_everything() -> Result<()> {
    let user = common::TestUser::new("Ada");
    let (server, _store) = common::spawn_with_memory(MemoryNoteStore::with_notes(vec![
        common::note_at(user.id, "one", "x", 1),
        common::note_at(user.id, "two", "x", 2),
    ]))
    .await?;

    let body = search(&server, &user, "!!!").await?;
    assert_eq!(titles(&body), vec!["two", "one"]);
    Ok(())
}

#[tokio::test]
async fn missing_search_term_is_a_bad_request() -> Result<()> {
    let (server, _store) = common::spawn_server().await?;
    let user = common::TestUser::new("Ada");

    let res = server.post_form(&user, "/dashboard/search", &[]).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
