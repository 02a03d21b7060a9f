use clubhouse_content::services::{
    CreateAnnouncementRequest, CreateBlogRequest, CreateLabManualRequest, LibraryFilter,
    UpdateBlogRequest,
};
use clubhouse_content::{AnnouncementService, BlogService, ContentError, LibraryService};
use clubhouse_database::test_utils::TestDatabase;

/// Tests truncate the shared test database and must run one at a time.
static TEST_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

#[tokio::test]
async fn blog_crud_and_slug_generation() -> anyhow::Result<()> {
    let _guard = TEST_LOCK.lock().await;
    let test_db = TestDatabase::with_migrations().await?;
    let service = BlogService::new(test_db.connection_arc());

    let blog = service
        .create_blog(CreateBlogRequest {
            title: "Intro to Rust!".to_string(),
            content: "# Hello".to_string(),
            author: "asha".to_string(),
            published: false,
        })
        .await?;
    assert_eq!(blog.slug, "intro-to-rust");
    assert!(!blog.published);

    // Same title gets a suffixed slug
    let second = service
        .create_blog(CreateBlogRequest {
            title: "Intro to Rust!".to_string(),
            content: "# Hello again".to_string(),
            author: "asha".to_string(),
            published: true,
        })
        .await?;
    assert_eq!(second.slug, "intro-to-rust-1");

    // Public slug lookup only sees published posts
    let err = service
        .get_published_blog_by_slug("intro-to-rust")
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::NotFound));
    assert_eq!(
        service
            .get_published_blog_by_slug("intro-to-rust-1")
            .await?
            .id,
        second.id
    );

    // Publishing the draft makes it visible; slug stays stable
    let updated = service
        .update_blog(
            blog.id,
            UpdateBlogRequest {
                title: Some("Intro to Rust, revised".to_string()),
                published: Some(true),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.slug, "intro-to-rust");
    assert_eq!(updated.title, "Intro to Rust, revised");

    // Public listing shows published posts only
    let page = service.list_blogs(1, 20, true).await?;
    assert_eq!(page.total, 2);

    service.delete_blog(blog.id).await?;
    let page = service.list_blogs(1, 20, false).await?;
    assert_eq!(page.total, 1);

    Ok(())
}

#[tokio::test]
async fn library_filters_by_subject_and_semester() -> anyhow::Result<()> {
    let _guard = TEST_LOCK.lock().await;
    let test_db = TestDatabase::with_migrations().await?;
    let service = LibraryService::new(test_db.connection_arc());

    for (subject, semester) in [("DSA", 3), ("DSA", 4), ("OS", 4)] {
        service
            .create_lab_manual(CreateLabManualRequest {
                title: format!("{subject} lab manual"),
                subject: subject.to_string(),
                semester,
                file_url: "https://files.club.test/manual.pdf".to_string(),
                description: None,
            })
            .await?;
    }

    let all = service
        .list_lab_manuals(LibraryFilter::default(), 1, 20)
        .await?;
    assert_eq!(all.total, 3);

    let dsa = service
        .list_lab_manuals(
            LibraryFilter {
                subject: Some("DSA".to_string()),
                semester: None,
            },
            1,
            20,
        )
        .await?;
    assert_eq!(dsa.total, 2);

    let dsa_sem4 = service
        .list_lab_manuals(
            LibraryFilter {
                subject: Some("DSA".to_string()),
                semester: Some(4),
            },
            1,
            20,
        )
        .await?;
    assert_eq!(dsa_sem4.total, 1);

    // Semester bounds are validated
    let err = service
        .create_lab_manual(CreateLabManualRequest {
            title: "bogus".to_string(),
            subject: "DSA".to_string(),
            semester: 9,
            file_url: "https://files.club.test/manual.pdf".to_string(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Validation(_)));

    Ok(())
}

#[tokio::test]
async fn pinned_announcements_sort_first() -> anyhow::Result<()> {
    let _guard = TEST_LOCK.lock().await;
    let test_db = TestDatabase::with_migrations().await?;
    let service = AnnouncementService::new(test_db.connection_arc());

    service
        .create_announcement(CreateAnnouncementRequest {
            title: "Weekly meetup".to_string(),
            body: "Friday 5pm".to_string(),
            pinned: false,
        })
        .await?;
    let pinned = service
        .create_announcement(CreateAnnouncementRequest {
            title: "Hackathon registration open".to_string(),
            body: "Register by Sunday".to_string(),
            pinned: true,
        })
        .await?;
    service
        .create_announcement(CreateAnnouncementRequest {
            title: "New textbooks added".to_string(),
            body: "See the library".to_string(),
            pinned: false,
        })
        .await?;

    let page = service.list_announcements(1, 20).await?;
    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].id, pinned.id);

    Ok(())
}
