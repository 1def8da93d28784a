use axum::http::{StatusCode, header};
use portfolio::Showcase;
use portfolio_contact::Command;
use tower::ServiceExt;

mod helpers;

use helpers::{body_json, body_string, get, setup_state};

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::router(state).oneshot(get("/health")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    Ok(())
}

#[tokio::test]
async fn test_index_renders_every_section() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::router(state).oneshot(get("/")).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    for id in [
        "id=\"home\"",
        "id=\"about\"",
        "id=\"experience\"",
        "id=\"projects\"",
        "id=\"tech\"",
        "id=\"freelancing\"",
        "id=\"contact\"",
    ] {
        assert!(html.contains(id), "missing section {id}");
    }

    assert!(html.contains("data-contact-form"));
    assert!(html.contains("placeholder=\"your@email.com\""));
    assert!(html.contains("Send Message"));
    assert!(html.contains("All rights reserved."));
    assert!(html.contains("/static/resume/resume.pdf"));

    Ok(())
}

#[tokio::test]
async fn test_index_lists_content() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let html = body_string(portfolio::router(state).oneshot(get("/")).await?).await;

    for experience in portfolio::content::EXPERIENCES {
        assert!(html.contains(experience.company), "{}", experience.company);
    }
    for project in portfolio::content::PROJECTS {
        assert!(html.contains(project.title), "{}", project.title);
    }
    for link in portfolio::content::NAV_LINKS {
        assert!(html.contains(&format!("href=\"{}\"", link.href)));
    }

    Ok(())
}

#[tokio::test]
async fn test_index_embeds_scenes_unescaped() -> anyhow::Result<()> {
    let showcase = Showcase {
        hero: "<svg id=\"hero-scene\"></svg>".to_owned(),
        tech: "<svg id=\"tech-scene\"></svg>".to_owned(),
        ..Default::default()
    };
    let state = helpers::state_with(Command::new(None), showcase);

    let html = body_string(portfolio::router(state).oneshot(get("/")).await?).await;

    assert!(html.contains("<svg id=\"hero-scene\"></svg>"));
    assert!(html.contains("<svg id=\"tech-scene\"></svg>"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_not_found() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::router(state)
        .oneshot(get("/does-not-exist"))
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Back home"));

    Ok(())
}

#[tokio::test]
async fn test_static_assets_are_cached() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::app(state).oneshot(get("/static/css/site.css")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    assert!(
        response.headers()[header::CACHE_CONTROL]
            .to_str()?
            .contains("max-age")
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_asset_is_not_found() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::app(state)
        .oneshot(get("/static/css/missing.css"))
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(
        response.headers()[header::CACHE_CONTROL]
            .to_str()?
            .starts_with("no-store")
    );

    Ok(())
}

#[tokio::test]
async fn test_pages_are_not_cached() -> anyhow::Result<()> {
    let (state, _journal) = setup_state(None);

    let response = portfolio::app(state).oneshot(get("/")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CACHE_CONTROL]
            .to_str()?
            .starts_with("no-store")
    );

    Ok(())
}
