//! The public project gallery: fetching with a built-in fallback, and per-card
//! image failure tracking.

use std::collections::HashSet;

use crate::data::Project;
use crate::id::ProjectId;
use crate::log::warn;
use crate::service::PortfolioService;

/// Projects shown whenever the backend has nothing to offer.
pub fn default_projects() -> Vec<Project> {
    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    vec![
        Project {
            id: "1".into(),
            title: "She Leads Africa Website Clone".to_string(),
            description: "A static website clone showcasing modern HTML & CSS design principles. This project demonstrates responsive layout design, semantic HTML structure, and clean CSS styling. Perfect example of frontend fundamentals implementation.".to_string(),
            image: "https://sheleadsafrica.org/wp-content/uploads/elementor/thumbs/2015-2025-IMPACT-REPORT-rexzrcx5hwzztzthy7zcj1jh8q1jd7cumpqhlelme8.jpg".to_string(),
            live_link: "https://wavy91.github.io/project/".to_string(),
            github_link: "https://github.com/WAVY91/project".to_string(),
            technologies: strings(&["HTML", "CSS", "Bootstrap"]),
            featured: false,
        },
        Project {
            id: "2".into(),
            title: "Airbnb Website Clone".to_string(),
            description: "A responsive booking platform clone that replicates key features of Airbnb. Built with focus on responsive design, intuitive user interface, and modern web standards. Showcases expertise in creating beautiful and functional layouts.".to_string(),
            image: "https://www.shutterstock.com/image-photo/stuttgart-germany-11302022-person-holding-260nw-2261860477.jpg".to_string(),
            live_link: "https://wavy91.github.io/bnb/".to_string(),
            github_link: "https://github.com/WAVY91/bnb".to_string(),
            technologies: strings(&["HTML", "CSS", "Bootstrap"]),
            featured: false,
        },
        Project {
            id: "3".into(),
            title: "Artisan Project - Service Connect Platform".to_string(),
            description: "A full-stack dynamic web application connecting customers with skilled artisans. Features user authentication, project management, real-time updates, and secure payment integration. Built with modern web technologies and Firebase authentication for secure user management.".to_string(),
            image: "https://www.figma.com/community/resource/30ea85e1-e78b-4cd2-b17d-d1b150bd74ec/thumbnail".to_string(),
            live_link: "https://artisan-project-orpin.vercel.app/".to_string(),
            github_link: "https://github.com/WAVY91/artisan-project".to_string(),
            technologies: strings(&["HTML", "CSS", "Bootstrap", "JavaScript", "Firebase"]),
            featured: true,
        },
    ]
}

/// Fetches the public projects, never returning an empty list.
pub async fn load_projects<S>(service: &S) -> Vec<Project>
where
    S: PortfolioService + ?Sized,
{
    match service.list_projects().await {
        Ok(projects) if !projects.is_empty() => projects,
        Ok(_) => default_projects(),
        Err(err) => {
            warn!("Error fetching projects: {err}");
            default_projects()
        }
    }
}

/// Projects whose image failed to load, keyed by id so reordering is harmless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageFailures {
    failed: HashSet<ProjectId>,
}

impl ImageFailures {
    pub fn mark_failed(&mut self, id: ProjectId) {
        self.failed.insert(id);
    }

    pub fn has_failed(&self, id: &ProjectId) -> bool {
        self.failed.contains(id)
    }
}

/// What the image slot of a project card shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CardImage<'a> {
    Image { src: &'a str, alt: &'a str },
    Placeholder { title: &'a str },
}

pub fn card_image<'a>(project: &'a Project, failures: &ImageFailures) -> CardImage<'a> {
    if failures.has_failed(&project.id) {
        CardImage::Placeholder {
            title: &project.title,
        }
    } else {
        CardImage::Image {
            src: &project.image,
            alt: &project.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, MockService};

    #[tokio::test]
    async fn empty_response_falls_back_to_defaults() {
        let service = MockService::new();

        let projects = load_projects(&service).await;

        assert_eq!(projects.len(), 3);
        let featured: Vec<bool> = projects.iter().map(|p| p.featured).collect();
        assert_eq!(featured, vec![false, false, true]);
    }

    #[tokio::test]
    async fn failed_request_falls_back_to_defaults() {
        let service = MockService::failing(503, None);

        let projects = load_projects(&service).await;

        assert_eq!(projects, default_projects());
    }

    #[tokio::test]
    async fn backend_projects_win() {
        let service = MockService::with_projects(vec![testing::project("p1", &["Rust"])]);

        let projects = load_projects(&service).await;

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id.as_str(), "p1");
    }

    #[test]
    fn failed_image_becomes_title_placeholder() {
        let first = testing::project("a", &[]);
        let second = testing::project("b", &[]);
        let mut failures = ImageFailures::default();

        failures.mark_failed(first.id.clone());

        assert_eq!(
            card_image(&first, &failures),
            CardImage::Placeholder {
                title: "Project a"
            }
        );
        assert!(matches!(card_image(&second, &failures), CardImage::Image { .. }));
    }

    #[test]
    fn failures_follow_ids_not_positions() {
        let mut projects = vec![testing::project("a", &[]), testing::project("b", &[])];
        let mut failures = ImageFailures::default();
        failures.mark_failed(projects[1].id.clone());

        projects.reverse();

        assert!(matches!(card_image(&projects[0], &failures), CardImage::Placeholder { .. }));
        assert!(matches!(card_image(&projects[1], &failures), CardImage::Image { .. }));
    }
}
