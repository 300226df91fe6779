use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use rollcall::cli;
use rollcall::config::database::init_db_pool;
use rollcall::logging::init_cli_logging;
use rollcall::modules::attendance::model::AttendanceStatus;
use rollcall::modules::classes::model::CreateClassDto;
use rollcall::modules::faculty::model::CreateFacultyDto;
use rollcall::modules::students::model::CreateStudentDto;
use sqlx::SqlitePool;

#[derive(Parser)]
#[command(name = "rollcall-cli")]
#[command(about = "Rollcall CLI - Administrative tools for Rollcall", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a student account and profile
    CreateStudent {
        #[arg(short = 'u', long)]
        username: Option<String>,

        #[arg(short = 'f', long)]
        first_name: Option<String>,

        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Create a faculty account and profile
    CreateFaculty {
        #[arg(short = 'u', long)]
        username: Option<String>,

        #[arg(short = 'f', long)]
        first_name: Option<String>,

        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Subjects taught, free text
        #[arg(short = 't', long)]
        taught_classes: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Create a class
    CreateClass {
        #[arg(short = 'b', long)]
        batch: i64,

        #[arg(short = 'n', long)]
        name: String,

        /// Faculty profile ID of the instructor
        #[arg(short = 'i', long)]
        instructor: Option<i64>,
    },
    /// Register a student in a class
    Enroll {
        #[arg(short = 's', long)]
        student: i64,

        #[arg(short = 'b', long)]
        batch: i64,
    },
    /// Record a present or absent mark
    MarkAttendance {
        #[arg(short = 's', long)]
        student: i64,

        #[arg(short = 'b', long)]
        batch: i64,

        /// P or A
        #[arg(long)]
        status: AttendanceStatus,

        /// Date of the session, YYYY-MM-DD (defaults to today)
        #[arg(short = 'd', long)]
        date: Option<NaiveDate>,
    },
    /// Compute monthly attendance percentages into the summaries table
    Summarize {
        /// Month number, 1-12 (defaults to the current month)
        #[arg(short = 'm', long)]
        month: Option<u32>,

        /// Year (defaults to the current year)
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },
}

fn prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::new().with_prompt(label).interact_text()?),
    }
}

fn prompt_password(value: Option<String>) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_cli_logging();

    let cli = Cli::parse();

    let pool = match init_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to open database: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&pool, cli.command).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &SqlitePool, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::CreateStudent {
            username,
            first_name,
            last_name,
            password,
        } => {
            let dto = CreateStudentDto {
                username: prompt(username, "Username")?,
                first_name: prompt(first_name, "First name")?,
                last_name: prompt(last_name, "Last name")?,
                password: prompt_password(password)?,
            };
            let student = cli::create_student(pool, dto).await?;
            println!("\n✅ Student created successfully!");
            println!("   Student ID: {}", student.id);
            println!("   Name: {} {}", student.first_name, student.last_name);
        }
        Commands::CreateFaculty {
            username,
            first_name,
            last_name,
            taught_classes,
            password,
        } => {
            let dto = CreateFacultyDto {
                username: prompt(username, "Username")?,
                first_name: prompt(first_name, "First name")?,
                last_name: prompt(last_name, "Last name")?,
                taught_classes: prompt(taught_classes, "Taught classes")?,
                password: prompt_password(password)?,
            };
            let faculty = cli::create_faculty(pool, dto).await?;
            println!("\n✅ Faculty created successfully!");
            println!("   Faculty ID: {}", faculty.id);
            println!("   Name: {} {}", faculty.first_name, faculty.last_name);
        }
        Commands::CreateClass {
            batch,
            name,
            instructor,
        } => {
            let class = cli::create_class(
                pool,
                CreateClassDto {
                    batch,
                    class_name: name,
                    instructor_id: instructor,
                },
            )
            .await?;
            println!("✅ Class {} ({}) created", class.batch, class.class_name);
        }
        Commands::Enroll { student, batch } => {
            if cli::enroll(pool, student, batch).await? {
                println!("✅ Student {} enrolled in class {}", student, batch);
            } else {
                println!("Student {} is already enrolled in class {}", student, batch);
            }
        }
        Commands::MarkAttendance {
            student,
            batch,
            status,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let record = cli::mark_attendance(pool, student, batch, date, status).await?;
            println!(
                "✅ Marked student {} as {} in class {} on {}",
                record.student_id, record.status, record.class_id, record.date
            );
        }
        Commands::Summarize { month, year } => {
            let today = Local::now().date_naive();
            let month = month.unwrap_or_else(|| today.month());
            let year = year.unwrap_or_else(|| today.year());

            let summaries = cli::summarize(pool, month, year).await?;
            println!(
                "✅ Summarized {} student/class pairs for {}/{}",
                summaries.len(),
                month,
                year
            );
        }
    }

    Ok(())
}
