//! # Fallback Roadmap Template
//!
//! The deterministic default document served whenever the completion API is
//! unconfigured or fails. It is pure string templating: given the same query
//! it produces byte-identical output, with no network access.

/// Capitalizes the first character of a query for use in the document title.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the four-phase fallback roadmap for `query`.
pub fn fallback_roadmap(query: &str) -> String {
    let title = capitalize_first(query);
    format!(
        r#"# {title} Learning Roadmap

## Phase 1: Foundation (Months 1-2)

### Goals
- Understand the core concepts and terminology of {query}
- Set up a complete working environment for {query}

### Topics
- Fundamentals of {query}
- Common workflows and best practices
- Reading documentation effectively

### Projects
- A small starter project applying the basics of {query}

### Tools
- Git and a code editor
- The standard beginner toolchain for {query}

## Phase 2: Development (Months 3-4)

### Goals
- Build real, working projects with {query}
- Become comfortable with intermediate techniques

### Topics
- Intermediate concepts in {query}
- Debugging and testing your work
- Working with libraries and frameworks used in {query}

### Projects
- A portfolio project demonstrating practical {query} skills
- Contributions to an open-source project related to {query}

### Tools
- Testing and debugging tools
- Package and dependency management

## Phase 3: Advanced (Months 5-6)

### Goals
- Master advanced patterns and architecture in {query}
- Understand performance and scalability trade-offs

### Topics
- Advanced topics and design patterns in {query}
- Performance optimization
- Security fundamentals

### Projects
- A production-quality application showcasing advanced {query} techniques

### Tools
- Profiling and monitoring tools
- Deployment and CI/CD tooling

## Phase 4: Professional (Months 7+)

### Goals
- Reach job-ready proficiency in {query}
- Build a public track record of your work

### Topics
- Industry standards and team workflows
- Interview preparation for {query} roles
- Staying current with the {query} ecosystem

### Projects
- A capstone project solving a real problem with {query}
- A polished portfolio and resume

### Tools
- Collaboration platforms (GitHub, code review tooling)
- Professional networking (LinkedIn, community forums)
"#
    )
}
