use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TEXT: &str = "To explore strange new worlds,\nTo seek out new life and new civilizations.";

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn wordweb() -> Command {
    Command::cargo_bin("wordweb").unwrap()
}

#[test]
fn test_cli_stats() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "stats.txt", "a b a b");

    wordweb()
        .arg("stats")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tokens:         4"))
        .stdout(predicate::str::contains("Words:          2"))
        .stdout(predicate::str::contains("Edges:          2"))
        .stdout(predicate::str::contains("Total weight:   3"));
    Ok(())
}

#[test]
fn test_cli_show() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "show.txt", "to be or not to be");

    wordweb()
        .arg("show")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Directed Graph (Node -> Target (Weight)):\n",
        ))
        .stdout(predicate::str::contains("to -> be(2)\n"));
    Ok(())
}

#[test]
fn test_cli_bridge() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "bridge.txt", TEXT);

    wordweb()
        .args(["bridge"])
        .arg(&input)
        .args(["Explore", "new"])
        .assert()
        .success()
        .stdout("The bridge words from \"explore\" to \"new\" are: strange.\n");

    // nothing bridges these: a normal answer, not a failure
    wordweb()
        .args(["bridge"])
        .arg(&input)
        .args(["explore", "life"])
        .assert()
        .success()
        .stdout("No bridge words from \"explore\" to \"life\"!\n");

    wordweb()
        .args(["bridge"])
        .arg(&input)
        .args(["ocean", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No \"ocean\" in the graph!"));
    Ok(())
}

#[test]
fn test_cli_generate() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "generate.txt", TEXT);

    wordweb()
        .args(["generate"])
        .arg(&input)
        .args(["Seek", "to", "explore", "new", "worlds"])
        .assert()
        .success()
        .stdout("Seek to explore strange new worlds\n");
    Ok(())
}

#[test]
fn test_cli_path_with_dot() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "path.txt", TEXT);
    let dot = dir.path().join("path.dot");

    wordweb()
        .args(["path"])
        .arg(&input)
        .args(["to", "life", "--dot"])
        .arg(&dot)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest path: to -> explore -> strange -> new -> life",
        ))
        .stdout(predicate::str::contains("Total weight: 4"));

    let content = fs::read_to_string(&dot)?;
    assert!(content.starts_with("digraph G {"));
    assert!(content.contains("\"new\" -> \"life\" [label=\"1\", color=red, penwidth=2.0];"));
    Ok(())
}

#[test]
fn test_cli_path_unreachable_and_missing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "unreachable.txt", "a b c");

    wordweb()
        .args(["path"])
        .arg(&input)
        .args(["c", "a"])
        .assert()
        .success()
        .stdout("No path found between \"c\" and \"a\".\n");

    wordweb()
        .args(["path"])
        .arg(&input)
        .args(["a", "zebra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Word \"zebra\" not found"));
    Ok(())
}

#[test]
fn test_cli_all_paths() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "all.txt", "a b c");

    wordweb()
        .args(["path"])
        .arg(&input)
        .arg("a")
        .assert()
        .success()
        .stdout("b: a -> b (weight 1)\nc: a -> b -> c (weight 2)\n");
    Ok(())
}

#[test]
fn test_cli_pagerank() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "rank.txt", TEXT);

    wordweb()
        .args(["pagerank"])
        .arg(&input)
        .args(["--top", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("converged"))
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("3. "))
        .stdout(predicate::str::contains("4. ").not());

    let output = wordweb()
        .args(["pagerank"])
        .arg(&input)
        .arg("--json")
        .output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let total: f64 = value["scores"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_f64().unwrap())
        .sum();
    assert!((total - 1.0).abs() < 1e-4);
    Ok(())
}

#[test]
fn test_cli_rank() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "rank_one.txt", TEXT);

    wordweb()
        .args(["rank"])
        .arg(&input)
        .arg("NEW")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PageRank of \"new\": 0."));

    wordweb()
        .args(["rank"])
        .arg(&input)
        .arg("ocean")
        .assert()
        .success()
        .stdout("No \"ocean\" in the graph!\n");
    Ok(())
}

#[test]
fn test_cli_walk_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "walk.txt", "alone");
    let output = dir.path().join("walk_out.txt");

    wordweb()
        .args(["--seed", "7", "walk"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Random Walk Path:\nalone\n"))
        .stdout(predicate::str::contains("Status: Stopped (Dead End at 'alone')"));

    let transcript = fs::read_to_string(&output)?;
    assert!(transcript.starts_with("Random Walk Path:\nalone\n\nStatus: "));
    Ok(())
}

#[test]
fn test_cli_walk_seed_reproducible() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "walk_seed.txt", TEXT);

    let run = || {
        wordweb()
            .args(["--seed", "42", "walk"])
            .arg(&input)
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
    Ok(())
}

#[test]
fn test_cli_export_formats() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "export.txt", "hello world");
    let dot = dir.path().join("graph.dot");

    wordweb()
        .args(["export"])
        .arg(&input)
        .arg("-o")
        .arg(&dot)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&dot)?,
        "digraph G {\n  node [shape=box, style=rounded];\n  \"hello\";\n  \"world\";\n  \"hello\" -> \"world\" [label=\"1\"];\n}\n"
    );

    wordweb()
        .args(["export"])
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"frequency\": 1"));

    wordweb()
        .args(["export"])
        .arg(&input)
        .args(["--format", "adjacency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("world -> (No outgoing edges)"));
    Ok(())
}

#[test]
fn test_cli_empty_input_is_empty_graph() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "empty.txt", "1234 !!! ---");

    wordweb()
        .arg("show")
        .arg(&input)
        .assert()
        .success()
        .stdout("Graph is empty.\n");

    wordweb()
        .arg("walk")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("graph has no nodes"));
    Ok(())
}

#[test]
fn test_cli_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "config_input.txt", TEXT);
    let config = write_input(&dir, "wordweb.toml", "[pagerank]\nmax_iterations = 1\n");

    wordweb()
        .arg("--config")
        .arg(&config)
        .arg("pagerank")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank (1 iterations, not converged):"));

    let bad = write_input(&dir, "bad.toml", "[pagerank\n");
    wordweb()
        .arg("--config")
        .arg(&bad)
        .arg("stats")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
    Ok(())
}

#[test]
fn test_cli_missing_input() {
    wordweb()
        .args(["stats", "/no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
