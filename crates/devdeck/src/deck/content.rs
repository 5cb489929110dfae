//! Static content tables for the talk.

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub const AI_INNOVATIONS: &[Feature] = &[
    Feature {
        id: 1,
        title: "Enable AI Innovations",
        description:
            "Chrome DevTools now integrates AI capabilities to help you debug faster, \
             understand code better, and improve performance insights.",
    },
    Feature {
        id: 2,
        title: "Console Insights",
        description:
            "AI analyzes console errors and provides actionable suggestions, context-aware \
             explanations, and recommendations for fixing common issues.",
    },
    Feature {
        id: 3,
        title: "AI Assistance for styling",
        description:
            "AI-powered assistance across DevTools panels including Styling, Performance, \
             Network, and Sources for improved debugging and optimization.",
    },
    Feature {
        id: 4,
        title: "Auto Labels for Performance Trace Annotations",
        description:
            "AI automatically generates meaningful labels and annotations in Performance \
             traces, making it easier to understand bottlenecks and optimize your application.",
    },
];

pub const DEVTOOLS_FEATURES: &[Feature] = &[
    Feature {
        id: 1,
        title: "CSS Shadow Editors",
        description:
            "Tweak multiple layered drop-shadows with live previews in the Styles pane.",
    },
    Feature {
        id: 2,
        title: "Logpoints: Console Logs Without Changing Your Code",
        description:
            "Logpoints let you log values in the Console during runtime without modifying \
             your source code or stopping execution.",
    },
    Feature {
        id: 3,
        title: "Coverage: Find unused JavaScript and CSS",
        description:
            "The Coverage panel helps you find unused JavaScript and CSS code. Removing unused \
             code can speed up your page load and save the mobile data of your users.",
    },
    Feature {
        id: 4,
        title: "Break on DOM Modification",
        description:
            "Debug mysterious DOM changes by breaking exactly when elements are modified, \
             added, or removed. Perfect for tracking down flickering issues and unexpected UI \
             jumps in third-party code.",
    },
    Feature {
        id: 5,
        title: "Rendering: Visualize Paint & Accessibility States",
        description:
            "The Rendering panel helps you debug compositing, scroll performance, color schemes \
             (Light/Dark), and simulate visual impairments to improve accessibility and UX.",
    },
    Feature {
        id: 6,
        title: "CSS Overview: Identify potential CSS improvements",
        description:
            "The CSS Overview panel helps you analyze and improve the consistency and quality \
             of your website's design, and spot unused declarations and accessibility issues.",
    },
    Feature {
        id: 7,
        title: "Capture Node Screenshot",
        description:
            "Take a screenshot of a specific HTML element directly without needing any \
             third-party tools. Perfect for documentation, UI reviews, and bug reporting.",
    },
];

pub const TOPICS: &[&str] = &[
    "Automating Sensor & Geolocation Overrides in Chrome DevTools for Test Environments",
    "Debug auto-closing elements with this dev-tool settings",
    "AI innovations in Chrome DevTools",
    "Underrated DevTools Superpowers Most Developers Miss",
    "How to deploy a secure MCP server on Cloud Run",
];

pub struct EventInfo {
    pub event: &'static str,
    pub speaker: &'static str,
    pub role: &'static str,
    pub topic: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
}

pub const EVENT: EventInfo = EventInfo {
    event: "DevFest Bhubaneswar 2025",
    speaker: "Suchitra Swain",
    role: "Sr Software Engineer & Sr Full Stack Web Developer",
    topic: "Mastering Debug & Accessibility with Chrome DevTools using AI Assistant and AI Console",
    date: "9th November 2025",
    venue: "Pipul Pamaja Premium Hotel and Convention",
};

/// A geolocation override as it would be entered in the Sensors panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPreset {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
    pub locale: &'static str,
}

pub const LOCATION_PRESETS: &[LocationPreset] = &[
    LocationPreset {
        name: "Bhubaneswar",
        latitude: 20.296_059,
        longitude: 85.824_539,
        timezone: "Asia/Kolkata",
        locale: "en-IN",
    },
    LocationPreset {
        name: "Berlin",
        latitude: 52.520_008,
        longitude: 13.404_954,
        timezone: "Europe/Berlin",
        locale: "de-DE",
    },
    LocationPreset {
        name: "London",
        latitude: 51.507_351,
        longitude: -0.127_758,
        timezone: "Europe/London",
        locale: "en-GB",
    },
    LocationPreset {
        name: "Mountain View",
        latitude: 37.386_052,
        longitude: -122.083_851,
        timezone: "America/Los_Angeles",
        locale: "en-US",
    },
    LocationPreset {
        name: "Tokyo",
        latitude: 35.689_487,
        longitude: 139.691_711,
        timezone: "Asia/Tokyo",
        locale: "ja-JP",
    },
];

pub struct Snippet {
    pub title: &'static str,
    pub code: &'static str,
}

pub const SNIPPETS: &[Snippet] = &[
    Snippet {
        title: "Extract all links from the page",
        code: r#"const links = Array.from(document.querySelectorAll('a[href]'));
const linkData = links.map(link => ({
  text: link.textContent.trim(),
  href: link.href,
  target: link.target || '_self'
}));
console.table(linkData);
console.log('Found ' + links.length + ' links');"#,
    },
    Snippet {
        title: "Highlight layout elements for debugging",
        code: r#"document.querySelectorAll('*').forEach(el => {
  const rect = el.getBoundingClientRect();
  if (rect.width > 0 && rect.height > 0) {
    el.style.outline = '1px solid rgba(255, 0, 0, 0.3)';
  }
});"#,
    },
    Snippet {
        title: "Monitor DOM changes and log them",
        code: r#"const observer = new MutationObserver(mutations => {
  mutations.forEach(m => console.log(m.type, m.target, m));
});
observer.observe(document.body, {
  childList: true,
  subtree: true,
  attributes: true,
  attributeOldValue: true
});"#,
    },
];

pub const QA_CONTACT_URL: &str = "https://www.linkedin.com/in/suchitra-swain-47562ab7/";
pub const MCP_CODELAB_URL: &str = "https://codelabs.developers.google.com/codelabs/cloud-run/how-to-deploy-a-secure-mcp-server-on-cloud-run?hl=en#0";
