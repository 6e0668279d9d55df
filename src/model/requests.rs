/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::ListDefaults;
use crate::constants::{BRANCH_REF_PREFIX, DEFAULT_PAGE_SIZE, FIRST_PAGE, TAG_REF_PREFIX};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Paging and ordering parameters shared by every list endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ListOptions {
    /// First page to request (1-based)
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
    /// Optional sort field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Optional sort direction (`asc` or `desc`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            per_page: DEFAULT_PAGE_SIZE,
            sort: None,
            direction: None,
        }
    }
}

impl ListOptions {
    /// Create options starting at page 1 with the default page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from the configured list defaults
    pub fn from_config(defaults: &ListDefaults) -> Self {
        Self {
            page: FIRST_PAGE,
            per_page: defaults.per_page,
            sort: defaults.sort.clone(),
            direction: defaults.direction.clone(),
        }
    }

    /// Set the first page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the sort field
    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    /// Set the sort direction
    pub fn with_direction(mut self, direction: &str) -> Self {
        self.direction = Some(direction.to_string());
        self
    }
}

/// Filters for listing commits
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ListCommitsRequest {
    /// Branch name or commit sha to start from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    /// Only commits touching this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Only commits by this author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Only commits after this ISO 8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Only commits before this ISO 8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    /// Paging
    #[serde(flatten)]
    pub options: ListOptions,
}

impl ListCommitsRequest {
    /// Create a request listing the default branch
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a branch or sha
    pub fn with_sha(mut self, sha: &str) -> Self {
        self.sha = Some(sha.to_string());
        self
    }

    /// Restrict to a path
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Restrict to an author
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Restrict to a time window
    pub fn with_range(mut self, since: &str, until: &str) -> Self {
        self.since = Some(since.to_string());
        self.until = Some(until.to_string());
        self
    }

    /// Replace the paging options
    pub fn with_options(mut self, options: ListOptions) -> Self {
        self.options = options;
        self
    }
}

/// Parameters for creating a repository
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateRepoRequest {
    /// User or organization that will own the repository; not sent on the wire
    #[serde(skip)]
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Repository path; Gitee uses `name` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Repository description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project homepage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Whether the repository is private
    pub private: bool,
    /// Whether to create an initial commit with a README
    pub auto_init: bool,
    /// Whether issues are enabled
    pub has_issues: bool,
    /// Whether the wiki is enabled
    pub has_wiki: bool,
}

impl CreateRepoRequest {
    /// Create parameters for an empty public repository without initial commit
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            path: None,
            description: None,
            homepage: None,
            private: false,
            auto_init: false,
            has_issues: true,
            has_wiki: true,
        }
    }

    /// Mark the repository private
    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the path
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Set the homepage
    pub fn with_homepage(mut self, homepage: &str) -> Self {
        self.homepage = Some(homepage.to_string());
        self
    }

    /// Create an initial commit
    pub fn with_auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }
}

/// Body of the create-branch call
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateBranchRequest {
    /// Source reference (branch name, tag or sha)
    pub refs: String,
    /// Name of the new branch
    pub branch_name: String,
}

impl CreateBranchRequest {
    /// Branch `branch_name` off `refs`
    pub fn new(branch_name: &str, refs: &str) -> Self {
        Self {
            refs: refs.to_string(),
            branch_name: branch_name.to_string(),
        }
    }
}

/// Body of the fork call
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CreateForkRequest {
    /// Organization to fork into; the token's user when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Name of the fork
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path of the fork
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CreateForkRequest {
    /// Fork into the token's own namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Fork into an organization
    pub fn into_organization(mut self, organization: &str) -> Self {
        self.organization = Some(organization.to_string());
        self
    }

    /// Rename the fork
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the fork path
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }
}

/// Repository events a webhook can subscribe to
#[derive(Debug, Clone, Copy, Default, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookEvents {
    /// Branch pushes
    pub push_events: bool,
    /// Tag pushes and releases
    pub tag_push_events: bool,
    /// Pull requests
    pub merge_requests_events: bool,
    /// Issues
    pub issues_events: bool,
}

impl WebhookEvents {
    /// Maps event names onto the four supported flags
    ///
    /// Accepted names: `push`; `tag_push`, `tag`, `release`; `pull_request`,
    /// `merge_request`, `merge_requests`; `issues`, `issue`. Any other name is
    /// logged and ignored.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut events = Self::default();
        for name in names {
            match name.as_ref().trim() {
                "push" => events.push_events = true,
                "tag_push" | "tag" | "release" => events.tag_push_events = true,
                "pull_request" | "merge_request" | "merge_requests" => {
                    events.merge_requests_events = true
                }
                "issues" | "issue" => events.issues_events = true,
                other => warn!("Ignoring unsupported webhook event: {}", other),
            }
        }
        events
    }

    /// Whether no event is enabled
    pub fn is_empty(&self) -> bool {
        !(self.push_events
            || self.tag_push_events
            || self.merge_requests_events
            || self.issues_events)
    }
}

/// Parameters for creating or updating a webhook
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct WebhookRequest {
    /// Callback URL
    pub url: String,
    /// Optional password or signing key sent with each delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Subscribed events
    #[serde(flatten)]
    pub events: WebhookEvents,
}

impl WebhookRequest {
    /// Create a webhook request with no events enabled
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            password: None,
            events: WebhookEvents::default(),
        }
    }

    /// Set the delivery password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = Some(password.to_string());
        self
    }

    /// Subscribe to the named events (see [`WebhookEvents::from_names`])
    pub fn with_events<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.events = WebhookEvents::from_names(names);
        self
    }
}

/// A git reference split into its kind and short name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitRef<'a> {
    /// `refs/tags/<name>`
    Tag(&'a str),
    /// `refs/heads/<name>` or a bare name
    Branch(&'a str),
}

impl<'a> GitRef<'a> {
    /// Classifies a reference; anything that is not a tag ref is a branch
    pub fn parse(reference: &'a str) -> Self {
        if let Some(tag) = reference.strip_prefix(TAG_REF_PREFIX) {
            GitRef::Tag(tag)
        } else {
            GitRef::Branch(
                reference
                    .strip_prefix(BRANCH_REF_PREFIX)
                    .unwrap_or(reference),
            )
        }
    }

    /// Short name without the `refs/...` prefix
    pub fn name(&self) -> &'a str {
        match self {
            GitRef::Tag(name) | GitRef::Branch(name) => name,
        }
    }
}
