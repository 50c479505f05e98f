//! Demo Data Seeder
//!
//! Populates the database with two demo accounts, two projects, and a
//! handful of issues and comments so the API has something to show right
//! after setup. Running it twice is a no-op.
//!
//! Both demo accounts log in with the password `password123`.

use issuehub::backend::auth::password::PasswordService;
use issuehub::backend::auth::users::{create_user, get_user_by_email};
use issuehub::backend::comments::db::create_comment;
use issuehub::backend::issues::db::{create_issue, IssuePriority, IssueStatus, NewIssue};
use issuehub::backend::projects::db::{create_project, insert_member, MemberRole};
use issuehub::backend::server::config::{load_database, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let settings = Settings::from_env();
    let pool = load_database(&settings).await?;

    if get_user_by_email(&pool, "alice@example.com").await?.is_some() {
        tracing::info!("Database already seeded, nothing to do");
        return Ok(());
    }

    tracing::info!("Seeding demo data...");
    let passwords = PasswordService::new(settings.preferred_password_scheme);

    let alice = create_user(
        &pool,
        "Alice Johnson".to_string(),
        "alice@example.com".to_string(),
        passwords.hash("password123")?,
    )
    .await?;
    let bob = create_user(
        &pool,
        "Bob Smith".to_string(),
        "bob@example.com".to_string(),
        passwords.hash("password123")?,
    )
    .await?;

    // Alice founds the main project, Bob a second one; each joins the
    // other's project as a regular member.
    let tracker = create_project(
        &pool,
        "IssueHub Development".to_string(),
        "ISSUE".to_string(),
        Some("Tracking the development of IssueHub itself".to_string()),
        alice.id,
    )
    .await?;
    let mobile = create_project(
        &pool,
        "Mobile App".to_string(),
        "MOBILE".to_string(),
        Some("Companion mobile application".to_string()),
        bob.id,
    )
    .await?;
    insert_member(&pool, tracker.id, bob.id, MemberRole::Member).await?;
    insert_member(&pool, mobile.id, alice.id, MemberRole::Member).await?;

    let login_bug = create_issue(
        &pool,
        NewIssue {
            project_id: tracker.id,
            title: "Login form rejects valid emails with plus signs".to_string(),
            description: Some(
                "Signing up with name+tag@example.com works but logging in \
                 with the same address fails."
                    .to_string(),
            ),
            status: IssueStatus::InProgress,
            priority: IssuePriority::High,
            reporter_id: bob.id,
            assignee_id: Some(alice.id),
        },
    )
    .await?;
    create_issue(
        &pool,
        NewIssue {
            project_id: tracker.id,
            title: "Add keyboard shortcuts for issue triage".to_string(),
            description: None,
            status: IssueStatus::Open,
            priority: IssuePriority::Low,
            reporter_id: alice.id,
            assignee_id: None,
        },
    )
    .await?;
    create_issue(
        &pool,
        NewIssue {
            project_id: tracker.id,
            title: "Server returns 500 when the database file is read-only".to_string(),
            description: Some("Happens after restoring from a backup.".to_string()),
            status: IssueStatus::Resolved,
            priority: IssuePriority::Critical,
            reporter_id: alice.id,
            assignee_id: Some(alice.id),
        },
    )
    .await?;
    create_issue(
        &pool,
        NewIssue {
            project_id: mobile.id,
            title: "Crash on launch with airplane mode enabled".to_string(),
            description: Some("Stack trace points at the sync bootstrap.".to_string()),
            status: IssueStatus::Open,
            priority: IssuePriority::High,
            reporter_id: bob.id,
            assignee_id: None,
        },
    )
    .await?;

    create_comment(
        &pool,
        login_bug.id,
        alice.id,
        "Reproduced. The login path normalizes the email differently than signup.".to_string(),
    )
    .await?;
    create_comment(
        &pool,
        login_bug.id,
        bob.id,
        "Thanks! Happy to test a fix on my account.".to_string(),
    )
    .await?;

    tracing::info!(
        "Seeded 2 users, 2 projects, 4 issues, 2 comments. \
         Log in as alice@example.com or bob@example.com with password123."
    );
    Ok(())
}
