//! Command handlers behind the `studiehub` binary. Each handler drives the
//! view state for one screen and prints the result.

use std::io::{self, BufRead};

use chrono::Utc;
use tokio::sync::mpsc;

use crate::cli::{
    AdminCategoryCommand, AdminCommand, AdminCourseCommand, AdminVideoCommand, CatalogArgs, Command,
    ProfileCommand,
};
use crate::core::client::StudieHub;
use crate::error::StudieHubError;
use crate::model::course::{Course, CourseFilters, CourseRequest, CourseUpdate, Difficulty};
use crate::model::enrollment::Enrollment;
use crate::model::user::{UpdateProfileRequest, User};
use crate::utils::input::{confirm, input, input_optional, input_password};
use crate::view::auth_flow::{PasswordResetFlow, SignInFlow, SignUpDetails, SignUpFlow};
use crate::view::catalog::{CatalogState, CourseSort, READ_MORE_LIMIT, should_show_read_more};
use crate::view::category_admin::{CategoryAdmin, CategoryDialog};
use crate::view::course_detail::{
    CourseDetailView, DESCRIPTION_LIMIT, TRAINER_BIO_LIMIT, embed_url, enrollment_status, linkedin_url,
    progress_color, time_since, truncate,
};
use crate::view::dashboard::{Dashboard, valid_enrollments};
use crate::view::notice::Notice;
use crate::view::search::SearchDebouncer;
use crate::view::validation::{SignInForm, validate_course, validate_password_change, validate_profile, validate_sign_in};
use crate::view::video_management::{CodeFileRow, VideoForm, VideoManager};

pub async fn run(hub: &StudieHub, command: Command) -> Result<(), StudieHubError> {
    match command {
        Command::Login {
            email,
            no_otp,
            google_token,
        } => login(hub, email, no_otp, google_token).await,
        Command::Register => register(hub).await,
        Command::ForgotPassword { email } => forgot_password(hub, email).await,
        Command::Logout => {
            hub.logout()?;
            report(Notice::success("Signed out"))
        }
        Command::Whoami => {
            let user = hub.require_authenticated()?;
            println!("{} <{}>", user.username, user.email);
            println!("Roles: {}", user.roles.join(", "));
            Ok(())
        }
        Command::Catalog(args) => catalog(hub, args).await,
        Command::Browse => browse(hub).await,
        Command::Course { id } => course(hub, &id).await,
        Command::Enroll { course_id } => {
            let mut view = CourseDetailView::load(hub, &course_id).await?;
            report(view.enroll(hub).await?)
        }
        Command::Complete { course_id, video } => complete(hub, &course_id, video).await,
        Command::Dashboard { recent, completed } => dashboard(hub, recent, completed).await,
        Command::Profile { command } => profile(hub, command.unwrap_or(ProfileCommand::Show)).await,
        Command::Admin { command } => {
            hub.require_admin()?;
            admin(hub, command).await
        }
    }
}

pub fn print_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("{}", notice);
    } else {
        println!("{}", notice);
    }
}

/// Prints success notices; error notices become the command's error.
fn report(notice: Notice) -> Result<(), StudieHubError> {
    if notice.is_error() {
        return Err(StudieHubError::new(&notice.message));
    }
    print_notice(&notice);
    Ok(())
}

fn welcome(user: &User) -> Result<(), StudieHubError> {
    report(Notice::success(format!("Welcome, {}!", user.username)))
}

enum OtpInput {
    Code(String),
    Resend,
    Cancel,
}

fn read_otp() -> io::Result<OtpInput> {
    let answer = input("Code from your email (r = resend, q = quit):")?;
    Ok(match answer.as_str() {
        "r" => OtpInput::Resend,
        "" | "q" => OtpInput::Cancel,
        _ => OtpInput::Code(answer),
    })
}

fn cancelled() -> StudieHubError {
    StudieHubError::new("Cancelled")
}

async fn login(
    hub: &StudieHub,
    email: Option<String>,
    no_otp: bool,
    google_token: Option<String>,
) -> Result<(), StudieHubError> {
    if let Some(token) = google_token {
        let user = hub
            .google_login(&token)
            .await
            .map_err(|e| e.or_message("Google sign-in failed"))?;
        return welcome(&user);
    }

    let email = match email {
        Some(email) => email,
        None => input("Email:")?,
    };
    let password = input_password("Password:")?;

    if no_otp {
        validate_sign_in(&SignInForm {
            email: &email,
            password: &password,
        })?;
        let user = hub
            .login(email.trim(), &password)
            .await
            .map_err(|e| e.or_message("Invalid credentials"))?;
        return welcome(&user);
    }

    let mut flow = SignInFlow::new(hub);
    print_notice(&flow.submit_credentials(&email, &password).await?);
    loop {
        match read_otp()? {
            OtpInput::Code(code) => match flow.submit_otp(&code).await {
                Ok(user) => return welcome(&user),
                Err(err) => print_notice(&Notice::from(&err)),
            },
            OtpInput::Resend => match flow.resend().await {
                Ok(notice) => print_notice(&notice),
                Err(err) => print_notice(&Notice::from(&err)),
            },
            OtpInput::Cancel => {
                flow.back();
                return Err(cancelled());
            }
        }
    }
}

async fn register(hub: &StudieHub) -> Result<(), StudieHubError> {
    let details = SignUpDetails {
        username: input("Username:")?,
        email: input("Email:")?,
        mobile_number: input("Mobile number:")?,
        password: input_password("Password:")?,
        confirm_password: input_password("Confirm password:")?,
        agree_to_terms: confirm("Accept the terms and conditions?")?,
    };

    let mut flow = SignUpFlow::new(hub);
    print_notice(&flow.submit_details(details).await?);
    loop {
        match read_otp()? {
            OtpInput::Code(code) => match flow.submit_otp(&code).await {
                Ok(user) => return welcome(&user),
                Err(err) => print_notice(&Notice::from(&err)),
            },
            OtpInput::Resend => match flow.resend().await {
                Ok(notice) => print_notice(&notice),
                Err(err) => print_notice(&Notice::from(&err)),
            },
            OtpInput::Cancel => {
                flow.back();
                return Err(cancelled());
            }
        }
    }
}

async fn forgot_password(hub: &StudieHub, email: Option<String>) -> Result<(), StudieHubError> {
    let email = match email {
        Some(email) => email,
        None => input("Email:")?,
    };
    let mut flow = PasswordResetFlow::new(hub);
    print_notice(&flow.request_code(&email).await?);

    let code = input("Code from your email:")?;
    print_notice(&flow.verify_code(&code).await?);

    let new_password = input_password("New password:")?;
    let confirm_password = input_password("Confirm new password:")?;
    report(flow.reset(&new_password, &confirm_password).await?)
}

fn parse_difficulty(raw: Option<String>) -> Result<Option<String>, StudieHubError> {
    raw.map(|d| d.parse::<Difficulty>().map(|d| d.as_str().to_string()))
        .transpose()
        .map_err(|e| StudieHubError::new(&e))
}

async fn catalog(hub: &StudieHub, args: CatalogArgs) -> Result<(), StudieHubError> {
    let mut state = CatalogState::new(hub.config().page_size);
    state.set_filters(CourseFilters {
        category: args.category,
        difficulty: parse_difficulty(args.difficulty)?,
        search: args.search,
    });
    state.set_sort(CourseSort::parse_or_default(&args.sort));

    let (courses, categories) = futures::join!(hub.get_courses(&state.filters), hub.get_categories());
    match categories {
        Ok(categories) => state.set_categories(&categories),
        Err(err) => log::warn!("Error loading categories: {}", err),
    }
    state.set_courses(courses.map_err(|e| e.or_message("Failed to load courses"))?);
    let page_size = state.page_size;
    state.set_page(args.page.saturating_sub(1), page_size);

    print_catalog(&state);
    Ok(())
}

fn print_catalog(state: &CatalogState) {
    if state.courses().is_empty() {
        println!("No courses found.");
        return;
    }
    for course in state.current_page() {
        print_course_line(state, course);
    }
    println!(
        "Page {} of {} ({} courses, sorted by {})",
        state.page + 1,
        state.page_count().max(1),
        state.courses().len(),
        state.sort
    );
}

fn print_course_line(state: &CatalogState, course: &Course) {
    println!(
        "{}  {} [{}] {}",
        course.id,
        course.title,
        course.difficulty,
        state.category_name(&course.category_id)
    );
    if should_show_read_more(&course.description) {
        println!("    {} (read more: studiehub course {})", truncate(&course.description, READ_MORE_LIMIT), course.id);
    } else if !course.description.is_empty() {
        println!("    {}", course.description);
    }
}

/// Each stdin line counts as one edit of the search box.
async fn browse(hub: &StudieHub) -> Result<(), StudieHubError> {
    let (tx, rx) = mpsc::channel::<String>(32);
    let reader = tokio::task::spawn_blocking(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim() == ":q" || tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    println!("Type a search term and press enter, :q to quit.");

    let mut state = CatalogState::new(hub.config().page_size);
    match hub.get_categories().await {
        Ok(categories) => state.set_categories(&categories),
        Err(err) => log::warn!("Error loading categories: {}", err),
    }

    let mut debouncer = SearchDebouncer::new(rx);
    while let Some(term) = debouncer.next().await {
        state.set_filters(CourseFilters {
            search: Some(term),
            ..Default::default()
        });
        match hub.get_courses(&state.filters).await {
            Ok(courses) => {
                state.set_courses(courses);
                print_catalog(&state);
            }
            Err(err) => print_notice(&Notice::from(&err.or_message("Failed to load courses"))),
        }
    }
    reader.await?;
    Ok(())
}

async fn course(hub: &StudieHub, id: &str) -> Result<(), StudieHubError> {
    let view = CourseDetailView::load(hub, id).await?;
    let course = &view.course;

    println!("{} [{}] {}", course.title, course.difficulty, view.category_name);
    println!("{}", truncate(&course.description, DESCRIPTION_LIMIT));
    println!();
    println!("Trainer: {} ({}, {})", course.trainer_name, course.field_of_work, course.experience);
    println!("  {}", truncate(&course.trainer_bio, TRAINER_BIO_LIMIT));
    if let Some(url) = course.linkedin_profile.as_deref().and_then(linkedin_url) {
        println!("  {}", url);
    }
    println!("Language: {}", course.language);
    println!();

    println!("Status: {}", view.status());
    if view.enrolled {
        println!(
            "Progress: {}% ({}/{} videos) [{}]",
            view.progress.percentage(),
            view.progress.total_completed,
            view.progress.total_videos,
            progress_color(f64::from(view.progress.percentage()))
        );
    }
    if let Some(enrollment) = &view.enrollment {
        println!("Enrolled: {}", time_since(&enrollment.enrolled_at, Utc::now()));
    }
    println!();

    if view.videos.is_empty() {
        println!("No videos yet.");
    }
    for (index, video) in view.videos.iter().enumerate() {
        let mark = if view.progress.is_completed(&video.id) { "x" } else { " " };
        println!("[{}] {:>2}. {}  {}", mark, index + 1, video.title, embed_url(&video.video_url));
        if let Some(link) = video.drive_notes_file_link.as_deref().filter(|l| !l.is_empty()) {
            println!("        notes: {}", link);
        }
        let names = video.drive_code_file_names.as_deref().unwrap_or_default();
        for (i, link) in video.drive_code_file_links.iter().flatten().enumerate() {
            let default = format!("Code File {}", i + 1);
            println!("        {}: {}", names.get(i).unwrap_or(&default), link);
        }
    }
    Ok(())
}

async fn complete(hub: &StudieHub, course_id: &str, video: Option<usize>) -> Result<(), StudieHubError> {
    hub.require_authenticated()?;
    let mut view = CourseDetailView::load(hub, course_id).await?;
    if let Some(number) = video {
        if number == 0 || number > view.videos.len() {
            return Err(StudieHubError::new(&format!("No video number {} in this course", number)));
        }
        view.select(number - 1);
    }
    print_notice(&view.mark_selected_complete(hub).await?);
    println!(
        "Progress: {}% ({}/{} videos)",
        view.progress.percentage(),
        view.progress.total_completed,
        view.progress.total_videos
    );
    Ok(())
}

fn print_enrollment(enrollment: &Enrollment) {
    println!(
        "{}  {}  {:.0}% [{}]  enrolled {}",
        enrollment.course_id.as_deref().unwrap_or_default(),
        enrollment.course_title.as_deref().unwrap_or_default(),
        enrollment.progress_percentage,
        enrollment_status(Some(enrollment)),
        time_since(&enrollment.enrolled_at, Utc::now())
    );
}

async fn dashboard(hub: &StudieHub, recent: bool, completed: bool) -> Result<(), StudieHubError> {
    hub.require_authenticated()?;
    if recent || completed {
        let loaded = if recent {
            hub.get_recent_enrollments().await
        } else {
            hub.get_completed_enrollments().await
        };
        let enrollments = valid_enrollments(loaded.map_err(|e| e.or_message("Failed to load enrollments"))?);
        if enrollments.is_empty() {
            println!("Nothing here yet.");
        }
        enrollments.iter().for_each(print_enrollment);
        return Ok(());
    }

    let dashboard = Dashboard::load(hub).await?;
    if let Some(stats) = &dashboard.stats {
        println!(
            "{} enrollments, {} completed ({:.0}% completion rate)",
            stats.total_enrollments, stats.completed_enrollments, stats.completion_rate
        );
    }
    println!("In progress ({}):", dashboard.in_progress_count());
    dashboard.in_progress().for_each(print_enrollment);
    println!("Completed ({}):", dashboard.completed_count());
    dashboard.completed().for_each(print_enrollment);
    Ok(())
}

async fn profile(hub: &StudieHub, command: ProfileCommand) -> Result<(), StudieHubError> {
    hub.require_authenticated()?;
    match command {
        ProfileCommand::Show => {
            let profile = hub
                .get_profile()
                .await
                .map_err(|e| e.or_message("Failed to load profile"))?;
            println!("{} <{}>", profile.username, profile.email);
            println!("Mobile: {}", profile.mobile_number.as_deref().unwrap_or("-"));
            println!("Sign-in: {}{}", profile.auth_provider, if profile.verified { ", verified" } else { "" });
            println!("Roles: {}", profile.roles.join(", "));
            println!("Joined: {}", time_since(&profile.created_at, Utc::now()));
            Ok(())
        }
        ProfileCommand::Update { username, mobile } => {
            let username = match username {
                Some(username) => username,
                None => hub.get_profile().await?.username,
            };
            let mobile = mobile.unwrap_or_default();
            validate_profile(&username, &mobile)?;
            let request = UpdateProfileRequest {
                username: Some(username.trim().to_string()),
                mobile_number: Some(mobile.trim().to_string()).filter(|m| !m.is_empty()),
                ..Default::default()
            };
            hub.update_profile(&request)
                .await
                .map_err(|e| e.or_message("Failed to update profile"))?;
            report(Notice::success("Profile updated successfully"))
        }
        ProfileCommand::Password => {
            let current = input_password("Current password:")?;
            let new_password = input_password("New password:")?;
            let confirm_password = input_password("Confirm new password:")?;
            validate_password_change(&current, &new_password, &confirm_password)?;
            let request = UpdateProfileRequest {
                current_password: Some(current),
                new_password: Some(new_password),
                ..Default::default()
            };
            hub.update_profile(&request)
                .await
                .map_err(|e| e.or_message("Failed to change password"))?;
            report(Notice::success("Password changed successfully"))
        }
    }
}

async fn admin(hub: &StudieHub, command: AdminCommand) -> Result<(), StudieHubError> {
    match command {
        AdminCommand::Stats => {
            let stats = hub
                .get_admin_stats()
                .await
                .map_err(|e| e.or_message("Failed to load dashboard statistics"))?;
            println!(
                "Users: {} (+{} this month)  Courses: {}  Videos: {}",
                stats.total_users, stats.new_users_this_month, stats.total_courses, stats.total_videos
            );
            println!(
                "Enrollments: {} (+{} this month)",
                stats.total_enrollments, stats.new_enrollments_this_month
            );
            let today = &stats.recent_activity;
            println!(
                "Today: {} new users, {} new enrollments, {} active users",
                today.new_users_today, today.new_enrollments_today, today.active_users_today
            );
            if let Some(course) = &today.most_popular_course {
                println!("Most popular: {} ({} enrollments)", course, today.most_popular_course_enrollments);
            }
            for course in &stats.course_stats {
                println!(
                    "  {}  {} enrolled, {} active, {} completed, {} videos",
                    course.course_title,
                    course.total_enrollments,
                    course.active_enrollments,
                    course.completed_enrollments,
                    course.total_videos
                );
            }
            Ok(())
        }
        AdminCommand::Course { command } => admin_course(hub, command).await,
        AdminCommand::Video { command } => admin_video(hub, command).await,
        AdminCommand::Category { command } => admin_category(hub, command).await,
    }
}

/// Prompt showing `current`; an empty answer keeps it.
fn prompt_keep(label: &str, current: &str) -> io::Result<String> {
    let answer = if current.is_empty() {
        input(&format!("{}:", label))?
    } else {
        input(&format!("{} [{}]:", label, current))?
    };
    Ok(if answer.is_empty() { current.to_string() } else { answer })
}

fn prompt_course(categories: &str, current: &CourseRequest) -> io::Result<CourseRequest> {
    println!("Categories: {}", categories);
    Ok(CourseRequest {
        title: prompt_keep("Title", &current.title)?,
        description: prompt_keep("Description", &current.description)?,
        category_id: prompt_keep("Category id", &current.category_id)?,
        difficulty: prompt_keep("Difficulty (BEGINNER/INTERMEDIATE/ADVANCED)", &current.difficulty)?.to_uppercase(),
        thumbnail_url: optional(prompt_keep("Thumbnail URL", current.thumbnail_url.as_deref().unwrap_or_default())?),
        trainer_name: prompt_keep("Trainer name", &current.trainer_name)?,
        trainer_bio: prompt_keep("Trainer bio", &current.trainer_bio)?,
        experience: prompt_keep("Trainer experience", &current.experience)?,
        linkedin_profile: optional(prompt_keep(
            "LinkedIn profile",
            current.linkedin_profile.as_deref().unwrap_or_default(),
        )?),
        field_of_work: prompt_keep("Field of work", &current.field_of_work)?,
        profile_picture_url: optional(prompt_keep(
            "Profile picture URL",
            current.profile_picture_url.as_deref().unwrap_or_default(),
        )?),
        language: prompt_keep("Language", &current.language)?,
    })
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

async fn category_list(hub: &StudieHub) -> String {
    match hub.get_categories().await {
        Ok(categories) => categories
            .iter()
            .map(|c| format!("{}={}", c.id, c.name))
            .collect::<Vec<_>>()
            .join(", "),
        Err(err) => {
            log::warn!("Error loading categories: {}", err);
            String::new()
        }
    }
}

async fn admin_course(hub: &StudieHub, command: AdminCourseCommand) -> Result<(), StudieHubError> {
    match command {
        AdminCourseCommand::Create => {
            let categories = category_list(hub).await;
            let request = prompt_course(
                &categories,
                &CourseRequest {
                    language: "English".to_string(),
                    ..Default::default()
                },
            )?;
            validate_course(&request)?;
            let course = hub
                .create_course(&request)
                .await
                .map_err(|e| e.or_message("Failed to create course"))?;
            report(Notice::success(format!("Course created successfully ({})", course.id)))
        }
        AdminCourseCommand::Update { id } => {
            let (course, categories) = futures::join!(hub.get_course(&id), category_list(hub));
            let course = course.map_err(|e| e.or_message("Course not found"))?;
            let current = CourseRequest {
                title: course.title,
                description: course.description,
                category_id: course.category_id,
                difficulty: course.difficulty,
                thumbnail_url: course.thumbnail_url,
                trainer_name: course.trainer_name,
                trainer_bio: course.trainer_bio,
                experience: course.experience,
                linkedin_profile: course.linkedin_profile,
                field_of_work: course.field_of_work,
                profile_picture_url: course.profile_picture_url,
                language: course.language,
            };
            let request = prompt_course(&categories, &current)?;
            validate_course(&request)?;
            hub.update_course(&id, &CourseUpdate::from(request))
                .await
                .map_err(|e| e.or_message("Failed to update course"))?;
            report(Notice::success("Course updated successfully"))
        }
        AdminCourseCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete course {}?", id))? {
                return Err(cancelled());
            }
            hub.delete_course(&id)
                .await
                .map_err(|e| e.or_message("Failed to delete course"))?;
            report(Notice::success("Course deleted successfully"))
        }
    }
}

fn prompt_video(mut form: VideoForm) -> io::Result<VideoForm> {
    form.title = prompt_keep("Title", &form.title)?;
    form.description = prompt_keep("Description", &form.description)?;
    form.video_url = prompt_keep("YouTube URL", &form.video_url)?;
    let position = form.position.map(|p| p.to_string()).unwrap_or_default();
    form.position = prompt_keep("Position", &position)?.trim().parse().ok().or(form.position);
    form.notes_link = prompt_keep("Notes file link", &form.notes_link)?;
    form.notes_name = prompt_keep("Notes file name", &form.notes_name)?;

    let mut rows = Vec::new();
    for row in &form.code_files {
        if confirm(&format!("Keep code file {}?", row.link))? {
            rows.push(row.clone());
        }
    }
    while let Some(link) = input_optional("Add code file link (empty to finish):")? {
        let name = input("Code file name:")?;
        rows.push(CodeFileRow { link, name });
    }
    form.code_files = rows;
    Ok(form)
}

fn print_videos(manager: &VideoManager) {
    if manager.videos().is_empty() {
        println!("No videos yet.");
    }
    for (index, video) in manager.videos().iter().enumerate() {
        println!(
            "{:>2}. {}  {}  (position {}{})",
            index + 1,
            video.id,
            video.title,
            video.position.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            if video.has_files() { ", files" } else { "" }
        );
    }
}

async fn admin_video(hub: &StudieHub, command: AdminVideoCommand) -> Result<(), StudieHubError> {
    match command {
        AdminVideoCommand::List { course_id } => {
            print_videos(&VideoManager::load(hub, &course_id).await?);
            Ok(())
        }
        AdminVideoCommand::Add { course_id } => {
            let mut manager = VideoManager::load(hub, &course_id).await?;
            let form = prompt_video(manager.new_form())?;
            report(manager.save(hub, &form, None).await?)
        }
        AdminVideoCommand::Edit { course_id, video_id } => {
            let mut manager = VideoManager::load(hub, &course_id).await?;
            let form = manager
                .edit_form(&video_id)
                .ok_or_else(|| StudieHubError::new("Video not found in this course"))?;
            let form = prompt_video(form)?;
            report(manager.save(hub, &form, Some(&video_id)).await?)
        }
        AdminVideoCommand::Delete {
            course_id,
            video_id,
            yes,
        } => {
            let mut manager = VideoManager::load(hub, &course_id).await?;
            if !yes && !confirm(&format!("Delete video {}?", video_id))? {
                return Err(cancelled());
            }
            report(manager.delete(hub, &video_id).await?)
        }
        AdminVideoCommand::Move { course_id, from, to } => {
            let mut manager = VideoManager::load(hub, &course_id).await?;
            let notice = manager
                .reorder(hub, from.saturating_sub(1), to.saturating_sub(1))
                .await;
            print_videos(&manager);
            match notice {
                Some(notice) => report(notice),
                None => report(Notice::success("Nothing to move")),
            }
        }
    }
}

async fn admin_category(hub: &StudieHub, command: AdminCategoryCommand) -> Result<(), StudieHubError> {
    let mut admin = CategoryAdmin::load(hub).await?;
    match command {
        AdminCategoryCommand::List => {
            for category in &admin.categories {
                println!(
                    "{}  {}{}  {}",
                    category.id,
                    category.name,
                    if category.active { "" } else { " (inactive)" },
                    category.description.as_deref().unwrap_or_default()
                );
            }
            Ok(())
        }
        AdminCategoryCommand::Create { name, description } => {
            let dialog = CategoryDialog {
                name,
                description: description.unwrap_or_default(),
                ..CategoryDialog::create()
            };
            report(admin.submit(hub, &dialog).await)
        }
        AdminCategoryCommand::Update { id, name, description } => {
            let category = admin
                .find(&id)
                .cloned()
                .ok_or_else(|| StudieHubError::new("Category not found"))?;
            let mut dialog = CategoryDialog::edit(category);
            if let Some(name) = name {
                dialog.name = name;
            }
            if let Some(description) = description {
                dialog.description = description;
            }
            report(admin.submit(hub, &dialog).await)
        }
        AdminCategoryCommand::Delete { id } => report(admin.delete(hub, &id).await),
        AdminCategoryCommand::Purge { id, yes } => {
            if !yes && !confirm(&format!("Permanently delete category {}?", id))? {
                return Err(cancelled());
            }
            report(admin.purge(hub, &id).await)
        }
    }
}
