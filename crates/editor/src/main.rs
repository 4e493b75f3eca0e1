//! `jobboard-edit`: the Edit Job flow from a terminal.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use anyhow::{Context, bail};
    use clap::Parser;

    use jobboard_auth::{CurrentUser, Role, Session};
    use jobboard_client::{ClientConfig, JobsClient};
    use jobboard_core::JobId;
    use jobboard_editor::{
        EditJobPage, EditorConfig, Field, FieldUpdate, Navigator, PageDriver, PageState, Redirect,
        build_update,
    };

    /// Edit a job posting: load it, apply edits, submit.
    #[derive(Parser, Debug)]
    #[command(name = "jobboard-edit")]
    #[command(about = "Edit a job posting through the jobs API", long_about = None)]
    pub struct Cli {
        /// Job identifier
        pub job_id: String,

        /// API root (e.g. http://localhost:5000/api)
        #[arg(long = "api-url")]
        pub api_url: Option<String>,

        /// Bearer token
        #[arg(long = "token", env = "JOBBOARD_TOKEN", hide_env_values = true)]
        pub token: Option<String>,

        /// Signed-in user id
        #[arg(long = "user-id", env = "JOBBOARD_USER_ID", default_value = "cli")]
        pub user_id: String,

        /// Signed-in user role; without it nobody is signed in
        #[arg(long = "role", env = "JOBBOARD_ROLE")]
        pub role: Option<String>,

        /// Field edit, e.g. `--set title="Senior dev"` or `--set pay.amount=1500`
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        pub set: Vec<(String, String)>,

        /// Add a required skill
        #[arg(long = "add-skill", value_name = "NAME")]
        pub add_skill: Vec<String>,

        /// Remove a required skill (exact name)
        #[arg(long = "remove-skill", value_name = "NAME")]
        pub remove_skill: Vec<String>,

        /// Print the update payload instead of sending it
        #[arg(long = "dry-run")]
        pub dry_run: bool,
    }

    fn parse_assignment(raw: &str) -> Result<(String, String), String> {
        let (field, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
        Ok((field.trim().to_string(), value.to_string()))
    }

    /// Redirects have nowhere to go in a terminal; report them.
    struct LogNavigator;

    impl Navigator for LogNavigator {
        fn navigate(&self, redirect: Redirect) {
            tracing::info!(
                to = redirect.to.path(),
                after_ms = redirect.after.as_millis() as u64,
                "navigation requested"
            );
        }
    }

    const SHOWN_FIELDS: &[Field] = &[
        Field::Title,
        Field::Category,
        Field::Company,
        Field::Location,
        Field::WorkType,
        Field::PayType,
        Field::PayAmount,
        Field::Duration,
        Field::Experience,
        Field::Deadline,
        Field::Status,
        Field::Description,
        Field::Requirements,
    ];

    pub async fn run() -> anyhow::Result<()> {
        jobboard_observability::init();
        let cli = Cli::parse();

        let job_id: JobId = cli.job_id.parse().context("invalid job id")?;
        let client_config = cli
            .api_url
            .map(ClientConfig::new)
            .unwrap_or_else(ClientConfig::from_env);
        let user = cli
            .role
            .map(|role| CurrentUser::new(cli.user_id, Role::new(role)));
        let session = Session::from_parts(cli.token, user);

        let mut driver = PageDriver::new(
            EditJobPage::new(job_id, &EditorConfig::from_env()),
            JobsClient::new(client_config),
            session,
            LogNavigator,
        );

        driver
            .mount()
            .await
            .context("editing jobs requires a signed-in recruiter")?;
        if let PageState::Error(msg) = driver.page().state() {
            bail!("{msg}");
        }

        let form = driver.page_mut().form_mut();
        for (field, value) in &cli.set {
            if let FieldUpdate::Ignored(reason) = form.set_field(field, value) {
                bail!("cannot set {field}: {reason:?}");
            }
        }
        for name in &cli.add_skill {
            if !form.add_skill(name) {
                tracing::warn!(skill = %name, "skill not added (blank or duplicate)");
            }
        }
        for name in &cli.remove_skill {
            if !form.remove_skill(name) {
                tracing::warn!(skill = %name, "skill not present");
            }
        }

        for field in SHOWN_FIELDS {
            println!("{:>14}: {}", field.name(), form.value(*field));
        }
        println!("{:>14}: {}", "requiredSkills", form.skills().join(", "));

        if cli.dry_run {
            let update = build_update(form)?;
            println!("{}", serde_json::to_string_pretty(&update)?);
            return Ok(());
        }

        driver.submit().await?;
        match driver.page().state() {
            PageState::Success(msg) => {
                println!("{msg}");
                Ok(())
            }
            PageState::Error(msg) => bail!("{msg}"),
            other => bail!("unexpected page state after submit: {other:?}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
