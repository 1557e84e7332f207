// src/main.rs
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct PostData {
    title: String,
    author: String,
    body: String,
    comments: Vec<String>,
}

// Static data object, built once at startup and owned by the entry point.
fn post_data() -> PostData {
    PostData {
        title: "Learning Rust on the Front-End".into(),
        author: "Michael".into(),
        body: "Components are just functions from props to markup. \
               This post walks through a greeting, a post view, and a \
               comment list — no state, no fetching, one render pass."
            .into(),
        comments: vec![
            "Nice writeup!".into(),
            "Keyed lists finally make sense to me.".into(),
            "Where's part two?".into(),
        ],
    }
}

#[derive(Properties, PartialEq)]
struct CommentProps {
    message: String,
}

#[function_component(Comment)]
fn comment(props: &CommentProps) -> Html {
    html! {
        <p class="comment">{ props.message.clone() }</p>
    }
}

#[derive(Properties, PartialEq)]
struct HelloProps {
    name: String,
    age: u32,
}

#[function_component(Hello)]
fn hello(props: &HelloProps) -> Html {
    html! {
        <div>
            <h1>{ format!("Hello {}", props.name) }</h1>
            <p>{ format!("You are {} years old", props.age) }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PostProps {
    title: String,
    author: String,
    body: String,
    comments: Vec<String>,
}

#[function_component(Post)]
fn post(props: &PostProps) -> Html {
    // One Comment per entry, keyed by position. Positions are unique and
    // stable within the single render; there is no reordering.
    let comments = props
        .comments
        .iter()
        .enumerate()
        .map(|(index, message)| {
            html! { <Comment key={index} message={message.clone()} /> }
        })
        .collect::<Html>();

    html! {
        <div class="post-page">
            <h1>{ props.title.clone() }</h1>
            <p>{ format!("By: {}", props.author) }</p>
            <hr />
            <p>{ props.body.clone() }</p>
            <h3>{ "Comments" }</h3>
            if props.comments.is_empty() {
                { "No comments here" }
            } else {
                { comments }
            }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let post = post_data();

    html! {
        <>
            <Hello name="Michael" age={32u32} />
            <Post
                title={post.title}
                author={post.author}
                body={post.body}
                comments={post.comments}
            />
        </>
    }
}

fn main() {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document");
    let root = document
        .get_element_by_id("root")
        .expect("missing <div id=\"root\"> in index.html");

    yew::Renderer::<App>::with_root(root).render();
}
