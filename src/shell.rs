//! Shell integration: the `wrk` wrapper function and completion scripts.
//!
//! A process cannot change its parent shell's directory, so commands that
//! navigate print [`CD_PATH_MARKER`] followed by a path. The wrapper streams
//! everything else through, swallows that line and `cd`s once the command
//! has finished.

use crate::cli::Cli;
use crate::CD_PATH_MARKER;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Name the tool is installed under.
pub const BIN_NAME: &str = "worktree";

/// Name of the wrapper function.
pub const WRAPPER_NAME: &str = "wrk";

const EXIT_MARKER: &str = "__WORKTREE_EXIT__";

/// Shells with a wrapper implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
}

impl ShellKind {
    fn completion_shell(self) -> Shell {
        match self {
            ShellKind::Bash => Shell::Bash,
            ShellKind::Zsh => Shell::Zsh,
            ShellKind::Fish => Shell::Fish,
        }
    }
}

// Shared by bash and zsh. The exit status travels as a final marker line
// because process substitution hides it.
const POSIX_WRAPPER: &str = r#"# worktree shell setup
wrk() {
    # Completion calls the tool directly
    if [ -n "${COMP_LINE}" ]; then
        command worktree "$@"
        return $?
    fi

    local line
    local dir_path=""
    local exit_code=0

    while IFS= read -r line; do
        case "$line" in
            @CD@*) dir_path="${line#@CD@}" ;;
            @EXIT@*) exit_code="${line#@EXIT@}" ;;
            *) printf '%s\n' "$line" ;;
        esac
    done < <(command worktree "$@"; echo "@EXIT@$?")

    if [ -n "$dir_path" ] && [ -d "$dir_path" ]; then
        cd "$dir_path" || return 1
    fi

    return "$exit_code"
}
"#;

const FISH_WRAPPER: &str = r#"# worktree shell setup
function wrk --wraps worktree
    set -l dir_path ""

    command worktree $argv | while read -l line
        if string match -q -- "@CD@*" $line
            set dir_path (string replace -- "@CD@" "" $line)
        else
            printf '%s\n' $line
        end
    end
    set -l exit_code $pipestatus[1]

    if test -n "$dir_path"; and test -d "$dir_path"
        cd $dir_path; or return 1
    end

    return $exit_code
end
"#;

/// The `wrk` function definition for `shell`.
pub fn wrapper(shell: ShellKind) -> String {
    let template = match shell {
        ShellKind::Bash | ShellKind::Zsh => POSIX_WRAPPER,
        ShellKind::Fish => FISH_WRAPPER,
    };
    template
        .replace("@CD@", CD_PATH_MARKER)
        .replace("@EXIT@", EXIT_MARKER)
}

/// Completion script for the tool itself.
pub fn completion(shell: ShellKind) -> String {
    let mut buffer = Vec::new();
    generate(
        shell.completion_shell(),
        &mut Cli::command(),
        BIN_NAME,
        &mut buffer,
    );
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Registers the tool's completions for the wrapper as well.
fn wrapper_completion(shell: ShellKind) -> &'static str {
    match shell {
        ShellKind::Bash => "complete -o default -F _worktree wrk",
        ShellKind::Zsh => "compdef _worktree wrk",
        ShellKind::Fish => "complete -c wrk -w worktree",
    }
}

/// Everything `worktree init <shell>` prints.
pub fn init_script(shell: ShellKind) -> String {
    format!(
        "{}\n{}\n# Enable completion for {WRAPPER_NAME}\n{}\n",
        wrapper(shell),
        completion(shell),
        wrapper_completion(shell)
    )
}
