use rand::Rng;

use crate::pipeline::classifier::Category;
use crate::pipeline::resolver::VideoAnalysis;

const WORDS_PER_MINUTE: usize = 200;
/// Fixed offset added to the word-count estimate, accounting for time spent
/// on the embedded video and resources sections.
const READING_TIME_OFFSET_MINS: u32 = 3;
const MAX_QUOTES: usize = 6;
const TWEET_TITLE_LIMIT: usize = 70;

#[derive(Debug, Clone)]
pub struct SocialPost {
    pub content: String,
    pub hashtags: Vec<String>,
}

/// Everything the generator produces for one video, before assembly into
/// typed assets.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub blog_post: String,
    pub reading_time_mins: u32,
    pub linkedin_posts: Vec<SocialPost>,
    pub tweets: Vec<SocialPost>,
    pub quotes: Vec<String>,
}

/// Compose the full content bundle from resolved metadata. Pure function of
/// its inputs: the only randomness (blog title template choice) comes from
/// the injected rng, so a fixed seed reproduces the output exactly.
pub fn generate(analysis: &VideoAnalysis, rng: &mut impl Rng) -> ContentBundle {
    let hashtags = relevant_hashtags(analysis);
    let (blog_post, reading_time_mins) = generate_blog_post(analysis, rng);

    ContentBundle {
        blog_post,
        reading_time_mins,
        linkedin_posts: generate_linkedin_posts(analysis, &hashtags),
        tweets: generate_tweets(analysis, &hashtags),
        quotes: generate_quotes(analysis),
    }
}

/// Tags from metadata plus the category name plus the category hashtag
/// bank, deduplicated in order.
fn relevant_hashtags(analysis: &VideoAnalysis) -> Vec<String> {
    let mut seen = Vec::new();
    let candidates = analysis
        .tags
        .iter()
        .map(|t| t.as_str())
        .chain(std::iter::once(analysis.category.as_str()))
        .chain(analysis.category.hashtag_bank().iter().copied());

    for candidate in candidates {
        let tag: String = candidate
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if !tag.is_empty() && !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

fn generate_blog_post(analysis: &VideoAnalysis, rng: &mut impl Rng) -> (String, u32) {
    let category = analysis.category;
    let emoji = category.emoji();
    let heading_templates = [
        format!("{} {} - Complete Analysis and Guide", emoji, analysis.title),
        format!("{} {}: Key Insights and Takeaways", emoji, analysis.title),
        format!("{} Breaking Down \"{}\"", emoji, analysis.title),
    ];
    let heading = &heading_templates[rng.gen_range(0..heading_templates.len())];

    let sections = blog_sections(analysis);
    let topics_block = analysis
        .key_topics
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            format!(
                "### {}. {}\n\n\
                 This section provides comprehensive coverage of {lower}. The practical \
                 approach and real-world examples make complex concepts accessible and \
                 immediately actionable.\n\n\
                 **Key Takeaway**: Understanding {lower} is crucial for success in {category}. \
                 The strategies discussed provide a clear path forward.\n\n\
                 **Action Item**: Implement the {lower} strategies discussed, starting with \
                 the foundational concepts and building up to more advanced applications.",
                i + 1,
                topic,
                lower = topic.to_lowercase(),
                category = category,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let insights_block = analysis
        .key_topics
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            format!(
                "{}. **{}**: Essential for {} success, providing practical strategies for immediate implementation.",
                i + 1,
                topic,
                category
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let seo_tags = analysis
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");

    let foundation = analysis
        .key_topics
        .first()
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| "the fundamentals".to_string());

    let body = format!(
        "## Introduction\n\n\
         {introduction}\n\n\
         ## Overview\n\n\
         {summary}\n\n\
         This content stands out for its practical approach and valuable insights. Whether \
         you're a beginner or have experience in {category}, there are actionable takeaways \
         that can make a real difference.\n\n\
         ## Key Areas Covered\n\n\
         {topics_block}\n\n\
         ## Why This Content Matters\n\n\
         {why_it_matters}\n\n\
         ### Practical Value\n\
         The insights shared aren't just theoretical concepts. Each technique comes with \
         specific implementation steps that have been tested in real-world scenarios.\n\n\
         ### Expert Insights\n\
         {channel} brings valuable expertise to the topic, making complex concepts \
         accessible and actionable for viewers at all levels.\n\n\
         ## Implementation Strategy\n\n\
         ### Phase 1: Foundation (Week 1-2)\n\
         Start by understanding and implementing the core concepts discussed. Focus on \
         {foundation} as your foundation.\n\n\
         ### Phase 2: Skill Building (Week 3-4)\n\
         Develop the specific skills highlighted in the content. Practice consistently and \
         track your progress.\n\n\
         ### Phase 3: Advanced Application (Week 5+)\n\
         Once you've mastered the basics, explore the more advanced strategies and \
         techniques presented.\n\n\
         ## Key Insights Summary\n\n\
         {insights_block}\n\n\
         ## Conclusion\n\n\
         \"{title}\" delivers exceptional value for anyone interested in {category}. \
         {conclusion}\n\n\
         ## Resources and Next Steps\n\n\
         - **Original Content**: [Watch the full video](https://youtube.com/watch?v={video_id})\n\
         - **Creator**: {channel}\n\
         - **Category**: {category}\n\
         - **Key Topics**: {topics_list}\n\n\
         ## Tags\n\n\
         {seo_tags}\n\n\
         ---\n\n\
         *What was your biggest takeaway from this content? Share your thoughts and let me \
         know how you plan to implement these strategies!*",
        introduction = sections.introduction,
        summary = analysis.summary,
        category = category,
        topics_block = topics_block,
        why_it_matters = sections.why_it_matters,
        channel = analysis.channel_title,
        foundation = foundation,
        insights_block = insights_block,
        title = analysis.title,
        conclusion = sections.conclusion,
        video_id = analysis.video_id,
        topics_list = analysis.key_topics.join(", "),
        seo_tags = seo_tags,
    );

    let word_count = body.split_whitespace().count();
    let reading_time =
        (word_count as u32).div_ceil(WORDS_PER_MINUTE as u32) + READING_TIME_OFFSET_MINS;

    let blog_post = format!(
        "# {}\n\n*{} min read | By {} | Category: {}*\n\n{}",
        heading, reading_time, analysis.channel_title, category, body
    );

    (blog_post, reading_time)
}

struct BlogSections {
    introduction: String,
    why_it_matters: String,
    conclusion: String,
}

fn blog_sections(analysis: &VideoAnalysis) -> BlogSections {
    let title = &analysis.title;
    let channel = &analysis.channel_title;
    let category = analysis.category;

    match category {
        Category::Music => BlogSections {
            introduction: format!(
                "Music has the power to move us, inspire us, and connect us across all \
                 boundaries. \"{}\" by {} is a perfect example of how artistry and \
                 creativity come together to create something truly special.",
                title, channel
            ),
            why_it_matters: "In today's music landscape, finding authentic, well-crafted \
                 content is more important than ever. This piece stands out for its artistic \
                 integrity and emotional resonance."
                .to_string(),
            conclusion: "This musical piece represents the kind of artistry that reminds us \
                 why music remains such a powerful form of human expression."
                .to_string(),
        },
        Category::Technology => BlogSections {
            introduction: format!(
                "In the rapidly evolving world of technology, staying current with best \
                 practices and innovative approaches is crucial for success. \"{}\" provides \
                 valuable insights that every tech professional should consider.",
                title
            ),
            why_it_matters: "The tech industry moves fast, and the strategies discussed here \
                 can help you stay ahead of the curve while building more effective, \
                 maintainable solutions."
                .to_string(),
            conclusion: "These technical insights can significantly impact your development \
                 approach and career trajectory in the technology field."
                .to_string(),
        },
        Category::Business => BlogSections {
            introduction: format!(
                "Success in business requires a combination of strategic thinking, practical \
                 execution, and continuous learning. \"{}\" offers valuable insights that can \
                 transform your approach to business challenges.",
                title
            ),
            why_it_matters: "In today's competitive business environment, the strategies and \
                 principles discussed can provide a significant competitive advantage."
                .to_string(),
            conclusion: "These business insights represent proven strategies that can \
                 accelerate your success and help you build more effective, sustainable \
                 business practices."
                .to_string(),
        },
        _ => BlogSections {
            introduction: format!(
                "\"{}\" delivers valuable insights and practical guidance that can make a \
                 real difference in your {} journey. The content combines expert knowledge \
                 with actionable strategies.",
                title, category
            ),
            why_it_matters: format!(
                "The practical approach and real-world applications make this content \
                 particularly valuable for anyone serious about improving their {} skills \
                 and knowledge.",
                category
            ),
            conclusion: format!(
                "The insights shared represent proven strategies that can enhance your \
                 approach to {} and help you achieve better results.",
                category
            ),
        },
    }
}

fn generate_linkedin_posts(analysis: &VideoAnalysis, hashtags: &[String]) -> Vec<SocialPost> {
    let category = analysis.category;
    let emoji = category.emoji();
    let highlights = analysis
        .key_topics
        .iter()
        .take(4)
        .enumerate()
        .map(|(i, topic)| format!("{}. {}", i + 1, topic))
        .collect::<Vec<_>>()
        .join("\n");
    let checklist = analysis
        .key_topics
        .iter()
        .take(3)
        .map(|topic| format!("- {}", topic))
        .collect::<Vec<_>>()
        .join("\n");
    let key_quote = first_sentence(&analysis.summary, category);
    let focus = analysis
        .key_topics
        .first()
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| "practical application".to_string());

    vec![
        SocialPost {
            content: format!(
                "{emoji} Just discovered exceptional content: \"{title}\"\n\n\
                 Created by {channel}, this content delivers incredible value for anyone \
                 interested in {category}.\n\n\
                 Key highlights:\n{highlights}\n\n\
                 What impressed me most was the practical approach. These aren't just \
                 theoretical concepts, but proven strategies you can implement immediately.\n\n\
                 Have you explored {category} recently? What's been your biggest challenge \
                 or success story?\n\n{tag_line}",
                emoji = emoji,
                title = analysis.title,
                channel = analysis.channel_title,
                category = category,
                highlights = highlights,
                tag_line = hashtag_line(hashtags, 8),
            ),
            hashtags: hashtags.iter().take(8).cloned().collect(),
        },
        SocialPost {
            content: format!(
                "Game-changing insight from \"{title}\":\n\n\
                 \"{key_quote}\"\n\n\
                 This completely shifted my perspective on {category}. {channel} breaks down \
                 complex concepts into digestible, actionable steps.\n\n\
                 I particularly appreciated the focus on {focus}. It's exactly what \
                 professionals in this field need to know.\n\n\
                 What's your experience with {category}? I'd love to hear your thoughts!\n\n\
                 {tag_line}",
                title = analysis.title,
                key_quote = key_quote,
                category = category,
                channel = analysis.channel_title,
                focus = focus,
                tag_line = hashtag_line(hashtags, 6),
            ),
            hashtags: hashtags.iter().take(6).cloned().collect(),
        },
        SocialPost {
            content: format!(
                "Content recommendation: \"{title}\"\n\n\
                 If you're interested in {category}, this is a must-watch. {channel} covers:\n\n\
                 {checklist}\n\n\
                 Perfect for both beginners looking to get started and experienced \
                 professionals wanting to refine their approach.\n\n\
                 What {category} content has made the biggest impact on your professional \
                 development?\n\n{tag_line}",
                title = analysis.title,
                category = category,
                channel = analysis.channel_title,
                checklist = checklist,
                tag_line = hashtag_line(hashtags, 7),
            ),
            hashtags: hashtags.iter().take(7).cloned().collect(),
        },
    ]
}

fn generate_tweets(analysis: &VideoAnalysis, hashtags: &[String]) -> Vec<SocialPost> {
    let category = analysis.category;
    let emoji = category.emoji();
    let short_title = truncate_title(&analysis.title);
    let key_quote = first_sentence(&analysis.summary, category);
    let covered = analysis
        .key_topics
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" & ");
    let takeaway = analysis
        .key_topics
        .first()
        .map(String::as_str)
        .unwrap_or("Exceptional content");

    vec![
        SocialPost {
            content: format!(
                "{emoji} Just watched: \"{short_title}\"\n\n\
                 Mind-blowing insights on {category}!\n\n\
                 Key takeaway: {takeaway}\n\n\
                 By {channel}\n\n{tag_line}",
                emoji = emoji,
                short_title = short_title,
                category = category,
                takeaway = takeaway,
                channel = analysis.channel_title,
                tag_line = hashtag_line(hashtags, 3),
            ),
            hashtags: hashtags.iter().take(3).cloned().collect(),
        },
        SocialPost {
            content: format!(
                "Best {category} insight today:\n\n\
                 \"{key_quote}\"\n\n\
                 Simple but powerful. Sometimes the most effective strategies are the most \
                 elegant ones.\n\n{tag_line}",
                category = category,
                key_quote = key_quote,
                tag_line = hashtag_line(hashtags, 2),
            ),
            hashtags: hashtags.iter().take(2).cloned().collect(),
        },
        SocialPost {
            content: format!(
                "New {category} content worth watching!\n\n\
                 Covers: {covered}\n\n\
                 The practical approach makes complex concepts actually implementable.\n\n\
                 {tag_line}",
                category = category,
                covered = covered,
                tag_line = hashtag_line(hashtags, 4),
            ),
            hashtags: hashtags.iter().take(4).cloned().collect(),
        },
    ]
}

/// Category quote bank first, topped up with generic fillers, capped at six
/// lines. Every category yields at least four.
fn generate_quotes(analysis: &VideoAnalysis) -> Vec<String> {
    let category = analysis.category;
    let mut quotes: Vec<String> = category
        .quote_bank()
        .iter()
        .map(|q| q.to_string())
        .collect();

    let fillers = [
        format!("Excellence in {} comes from consistent daily practice", category),
        format!("The best {} strategies are simple but not easy", category),
        "Knowledge without action is just entertainment".to_string(),
        format!("Success in {} is built one small win at a time", category),
        "The difference between good and great is attention to detail".to_string(),
    ];
    for filler in fillers {
        if quotes.len() >= MAX_QUOTES {
            break;
        }
        quotes.push(filler);
    }
    quotes.truncate(MAX_QUOTES);
    quotes
}

fn hashtag_line(hashtags: &[String], limit: usize) -> String {
    hashtags
        .iter()
        .take(limit)
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_sentence(summary: &str, category: Category) -> String {
    summary
        .split('.')
        .map(str::trim)
        .find(|s| s.len() > 20)
        .map(|s| format!("{}.", s))
        .unwrap_or_else(|| {
            format!(
                "Excellence in {} comes from consistent application of proven principles.",
                category
            )
        })
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > TWEET_TITLE_LIMIT {
        let cut: String = title.chars().take(TWEET_TITLE_LIMIT - 3).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}
