use crate::error::{Result, ShareError};
use crate::prompt::Prompter;
use crate::repo::{CommitInfo, RepoStatus, Vcs};
use chrono::DateTime;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A standalone repository on `master` with one commit and no remote.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_working_repo(temp_dir.path());
    temp_dir
}

/// Two clones ("alice" and "bob") of a shared bare `origin`, both on a
/// `master` branch that tracks `origin/master`.
pub(crate) struct SharedRemote {
    _root: TempDir,
    pub origin: PathBuf,
    pub alice: PathBuf,
    pub bob: PathBuf,
}

pub(crate) fn create_shared_remote() -> SharedRemote {
    let root = TempDir::new().unwrap();
    let origin = root.path().join("origin.git");
    let alice = root.path().join("alice");
    let bob = root.path().join("bob");

    std::fs::create_dir_all(&origin).unwrap();
    git(&origin, &["init", "--bare"]);
    git(&origin, &["symbolic-ref", "HEAD", "refs/heads/master"]);

    std::fs::create_dir_all(&alice).unwrap();
    init_working_repo(&alice);
    let origin_str = origin.to_string_lossy().to_string();
    git(&alice, &["remote", "add", "origin", &origin_str]);
    git(&alice, &["push", "--set-upstream", "origin", "master"]);

    git(root.path(), &["clone", &origin_str, "bob"]);
    configure_identity(&bob, "Bob", "bob@example.com");

    SharedRemote {
        _root: root,
        origin,
        alice,
        bob,
    }
}

fn init_working_repo(path: &Path) {
    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    configure_identity(path, "Alice", "alice@example.com");

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

fn configure_identity(path: &Path, name: &str, email: &str) {
    git(path, &["config", "user.email", email]);
    git(path, &["config", "user.name", name]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// In-memory [`Vcs`] that records every call and can fail a chosen operation.
pub(crate) struct FakeVcs {
    pub calls: RefCell<Vec<String>>,
    pub current_branch: RefCell<Option<String>>,
    pub clean: bool,
    pub tracking: bool,
    pub remote_branches: Vec<String>,
    pub commit_infos: HashMap<String, CommitInfo>,
    pub aliases: RefCell<HashMap<String, String>>,
    pub fail_on: Option<&'static str>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            current_branch: RefCell::new(Some("feature".to_string())),
            clean: false,
            tracking: false,
            remote_branches: Vec::new(),
            commit_infos: HashMap::new(),
            aliases: RefCell::new(HashMap::new()),
            fail_on: None,
        }
    }

    pub fn with_remote_branch(mut self, name: &str, author: &str, date_rfc2822: &str) -> Self {
        self.remote_branches.push(name.to_string());
        self.commit_infos.insert(
            name.to_string(),
            CommitInfo {
                author: author.to_string(),
                date: DateTime::parse_from_rfc2822(date_rfc2822).unwrap(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Names of the operations invoked, without their arguments.
    pub fn operations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.split_whitespace().next().unwrap_or("").to_string())
            .collect()
    }

    pub fn current(&self) -> Option<String> {
        self.current_branch.borrow().clone()
    }

    fn record(&self, op: &str, args: &[&str]) -> Result<()> {
        let mut call = op.to_string();
        for arg in args {
            call.push(' ');
            call.push_str(arg);
        }
        self.calls.borrow_mut().push(call);

        if self.fail_on == Some(op) {
            return Err(ShareError::GitError(format!("simulated {} failure", op)));
        }
        Ok(())
    }
}

impl Vcs for FakeVcs {
    fn status(&self) -> Result<RepoStatus> {
        self.record("status", &[])?;
        Ok(RepoStatus {
            current_branch: self.current(),
            upstream: self.tracking.then(|| "origin/feature".to_string()),
            is_clean: self.clean,
        })
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record("checkout", &[branch])?;
        *self.current_branch.borrow_mut() = Some(branch.to_string());
        Ok(())
    }

    fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.record("checkout_new_branch", &[branch])?;
        *self.current_branch.borrow_mut() = Some(branch.to_string());
        Ok(())
    }

    fn delete_local_branch(&self, branch: &str) -> Result<()> {
        self.record("delete_local_branch", &[branch])
    }

    fn merge(&self, source: &str, target: &str) -> Result<()> {
        self.record("merge", &[source, target])
    }

    fn pull(&self) -> Result<()> {
        self.record("pull", &[])
    }

    fn push_set_upstream(&self, remote: &str, branch: &str) -> Result<()> {
        self.record("push_set_upstream", &[remote, branch])
    }

    fn fetch_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        self.record("fetch_refspec", &[remote, refspec])
    }

    fn list_remote_branches(&self, pattern: &str) -> Result<Vec<String>> {
        self.record("list_remote_branches", &[pattern])?;
        Ok(self.remote_branches.clone())
    }

    fn show_commit_info(&self, reference: &str) -> Result<CommitInfo> {
        self.record("show_commit_info", &[reference])?;
        self.commit_infos
            .get(reference)
            .cloned()
            .ok_or_else(|| ShareError::GitError(format!("unknown revision {}", reference)))
    }

    fn stage_all(&self) -> Result<()> {
        self.record("stage_all", &[])
    }

    fn commit_no_verify(&self, message: &str) -> Result<()> {
        self.record("commit_no_verify", &[message])
    }

    fn reset_soft_to_parent(&self) -> Result<()> {
        self.record("reset_soft_to_parent", &[])
    }

    fn delete_remote_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record("delete_remote_branch", &[remote, branch])
    }

    fn global_alias(&self, name: &str) -> Result<Option<String>> {
        self.record("global_alias", &[name])?;
        Ok(self.aliases.borrow().get(name).cloned())
    }

    fn set_global_alias(&self, name: &str, value: &str) -> Result<()> {
        self.record("set_global_alias", &[name, value])?;
        self.aliases
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// [`Prompter`] that replays canned answers and remembers what it was shown.
pub(crate) struct ScriptedPrompter {
    pub confirms: RefCell<VecDeque<bool>>,
    pub selections: RefCell<VecDeque<usize>>,
    pub shown: RefCell<Vec<Vec<String>>>,
    pub confirm_prompts: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self {
            confirms: RefCell::new(VecDeque::new()),
            selections: RefCell::new(VecDeque::new()),
            shown: RefCell::new(Vec::new()),
            confirm_prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn confirming(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn selecting(self, index: usize) -> Self {
        self.selections.borrow_mut().push_back(index);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.confirm_prompts.borrow_mut().push(message.to_string());
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ShareError::PromptError("unexpected confirm prompt".to_string()))
    }

    fn select(&self, _message: &str, items: &[String]) -> Result<usize> {
        self.shown.borrow_mut().push(items.to_vec());
        self.selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ShareError::PromptError("unexpected select prompt".to_string()))
    }
}
