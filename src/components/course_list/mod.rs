//! Course list for the active learning path.
//!
//! Renders one card per course: thumbnail, title, optional description and
//! a link to the video. Media URLs that fail validation are left out rather
//! than rendered.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{Course, LearningPath};
use crate::utils::media_url;

stylance::import_crate_style!(css, "src/components/course_list/course_list.module.css");

/// Section heading for `path`, e.g. "DevOps Courses".
fn heading_for(path: LearningPath) -> String {
    format!("{} Courses", path.label())
}

#[component]
pub fn CourseList(courses: Vec<Course>, path: LearningPath) -> impl IntoView {
    let heading = heading_for(path);
    let label = heading.clone();

    view! {
        <section class=css::list aria-label=label>
            <h2 class=css::heading>{heading}</h2>
            <div class=css::grid>
                <For
                    each=move || courses.clone()
                    key=|course| course.id.clone()
                    children=move |course| view! { <CourseCard course=course /> }
                />
            </div>
        </section>
    }
}

#[component]
fn CourseCard(course: Course) -> impl IntoView {
    let video = media_url(&course.video_url);
    let thumbnail = media_url(&course.thumbnail_url);
    let summary = course.summary().map(str::to_string);
    let alt = course.title.clone();

    view! {
        <article class=css::card>
            <div class=css::media>
                {match thumbnail {
                    Some(src) => view! {
                        <img class=css::thumbnail src=src alt=alt loading="lazy" />
                    }.into_any(),
                    None => view! { <div class=css::thumbnailPlaceholder></div> }.into_any(),
                }}
            </div>

            <div class=css::body>
                <h3 class=css::title>{course.title}</h3>
                {summary.map(|text| view! { <p class=css::description>{text}</p> })}

                {match video {
                    Some(href) => view! {
                        <a class=css::watch href=href target="_blank" rel="noopener noreferrer">
                            <Icon icon=ic::PLAY />
                            <span>"Watch"</span>
                        </a>
                    }.into_any(),
                    None => view! {
                        <span class=css::unavailable>"Video unavailable"</span>
                    }.into_any(),
                }}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_for_path() {
        assert_eq!(heading_for(LearningPath::DevOps), "DevOps Courses");
        assert_eq!(heading_for(LearningPath::AiMl), "AI/ML Courses");
    }
}
