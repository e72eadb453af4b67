use longform_store::record::PostRecord;

struct Seed<'a> {
    id: &'a str,
    title: &'a str,
    author: &'a str,
    date: &'a str,
    read_time: i64,
    tags: &'a [&'a str],
    excerpt: &'a str,
    content: &'a str,
}

fn article(seed: &Seed<'_>) -> PostRecord {
    PostRecord {
        id: seed.id.to_owned(),
        title: seed.title.to_owned(),
        content: seed.content.to_owned(),
        author: seed.author.to_owned(),
        author_avatar: format!("https://i.pravatar.cc/150?u={}", seed.id),
        date: seed.date.to_owned(),
        read_time: seed.read_time,
        tags: seed.tags.iter().map(|&tag| tag.to_owned()).collect(),
        image_url: format!("https://picsum.photos/seed/{}/1200/600", seed.id),
        excerpt: seed.excerpt.to_owned(),
    }
}

/// The article set served by this instance. The site ships its posts as
/// static data; pointing the router at a different `PostStore` is the upgrade
/// path to a real backend.
pub fn sample_articles() -> Vec<PostRecord> {
    [
        Seed {
            id: "getting-started-react-hooks",
            title: "Getting Started with React Hooks",
            author: "Maya Lindqvist",
            date: "Mar 12, 2024",
            read_time: 8,
            tags: &["React", "Frontend", "Web Development"],
            excerpt: "Hooks turned class lifecycles into plain functions. Here is how to think in them from day one.",
            content: "<p>When hooks landed, the mental model of a component changed from a machine \
                with lifecycle callbacks to a function that re-runs. Most confusion with hooks \
                comes from holding on to the old model.</p>\
                <p>This article walks through state, effects, and memoization with examples that \
                start from the re-run model, so the rules of hooks feel like consequences rather \
                than trivia.</p>",
        },
        Seed {
            id: "css-grid-layouts",
            title: "Mastering CSS Grid Layouts",
            author: "Jonah Park",
            date: "Feb 28, 2024",
            read_time: 6,
            tags: &["CSS", "Design", "Frontend"],
            excerpt: "Grid is the first layout system on the web that was designed for pages, not documents.",
            content: "<p>Flexbox distributes space along one axis; grid places content on two. The \
                practical difference is that grid lets the container own the layout, which keeps \
                child components reusable.</p>\
                <p>We build a full page layout with named areas, then make it responsive with a \
                single <code>minmax</code> change and no media queries.</p>",
        },
        Seed {
            id: "ai-assisted-coding",
            title: "AI-Assisted Coding in Practice",
            author: "Priya Raghavan",
            date: "Apr 02, 2024",
            read_time: 11,
            tags: &["AI", "Web Development"],
            excerpt: "What changes, and what doesn't, when a language model sits in your editor.",
            content: "<p>The tooling conversation tends to swing between hype and dismissal. Day to \
                day, the effect is narrower: boilerplate gets cheap, and review gets more \
                important.</p>\
                <p>This piece collects patterns from a year of shipping with an assistant: prompt \
                scoping, test-first generation, and knowing when to turn it off.</p>",
        },
        Seed {
            id: "design-systems",
            title: "Design Systems that Scale",
            author: "Maya Lindqvist",
            date: "Jan 19, 2024",
            read_time: 9,
            tags: &["Design", "Frontend"],
            excerpt: "A component library is not a design system until the decisions are written down.",
            content: "<p>Teams usually start a design system by collecting components. The value, \
                though, is in the constraints: spacing scales, color roles, and the rules for \
                when to break them.</p>\
                <p>We look at how three small teams documented decisions early and avoided the \
                rewrite that usually hits at component fifty.</p>",
        },
        Seed {
            id: "react-server-components",
            title: "Understanding React Server Components",
            author: "Jonah Park",
            date: "Mar 30, 2024",
            read_time: 12,
            tags: &["React", "Web Development"],
            excerpt: "Server components move the data boundary, not just the rendering.",
            content: "<p>The common framing is that server components render HTML earlier. The more \
                useful framing is that they let the data-fetching layer live next to the data, \
                leaving the client bundle with only the interactive parts.</p>\
                <p>We trace one page through both architectures and measure what actually crosses \
                the wire.</p>",
        },
        Seed {
            id: "prompt-engineering",
            title: "A Field Guide to Prompt Engineering",
            author: "Priya Raghavan",
            date: "Apr 15, 2024",
            read_time: 7,
            tags: &["AI"],
            excerpt: "Treat prompts like interfaces: versioned, tested, and owned by someone.",
            content: "<p>Most prompt advice is folklore. The durable part is engineering practice: \
                keep prompts in the repo, diff their outputs, and write down what each clause is \
                for.</p>\
                <p>A short guide to the habits that survive model upgrades.</p>",
        },
    ]
    .iter()
    .map(article)
    .collect()
}
