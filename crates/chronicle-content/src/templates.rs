use chronicle_core::models::article::NewArticle;
use chronicle_core::models::topic::Topic;

/// A hand-written article used in place of generated text.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub topic: Topic,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub reading_time: u32,
}

impl Template {
    pub fn to_new_article(&self) -> NewArticle {
        NewArticle {
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            topic: self.topic,
            reading_time: self.reading_time,
        }
    }
}

pub static TEMPLATES: [Template; 5] = [
    Template {
        topic: Topic::Technology,
        title: "The Rise of Quantum Computing: A New Era of Computation",
        excerpt: "Quantum computing is rapidly evolving from a theoretical concept to a practical reality. As major tech companies invest billions in this revolutionary technology, we explore what this means for the future of computing and society.",
        content: r#"The world of computing is on the brink of a revolutionary transformation. Quantum computing, once relegated to the realm of theoretical physics, is now emerging as a practical technology with the potential to reshape industries from healthcare to finance.

## Understanding Quantum Mechanics

At its core, quantum computing leverages the principles of quantum mechanics to process information in fundamentally different ways than classical computers. While traditional computers use bits that exist as either 0 or 1, quantum computers use qubits that can exist in multiple states simultaneously through a phenomenon called superposition.

This capability, combined with quantum entanglement, allows quantum computers to explore multiple solutions to a problem at once. For certain types of calculations, this represents an exponential speedup compared to classical approaches.

## Current State of Development

Major technology companies including IBM, Google, and Microsoft are investing heavily in quantum computing research. Google claimed to achieve "quantum supremacy" in 2019, demonstrating a quantum computer performing a calculation that would take classical supercomputers thousands of years.

> The potential of quantum computing to solve previously intractable problems makes it one of the most exciting frontiers in technology today.

However, significant challenges remain. Quantum systems are extremely sensitive to environmental interference, requiring temperatures near absolute zero to operate. Error correction and qubit stability continue to be active areas of research.

## Implications for the Future

The applications of mature quantum computing are vast. Drug discovery could be accelerated by simulating molecular interactions. Cryptography will need to evolve to remain secure against quantum attacks. Optimization problems in logistics, finance, and artificial intelligence could see dramatic improvements.

As we stand at the threshold of this quantum era, the decisions we make about research priorities, access, and governance will shape how this powerful technology benefits humanity."#,
        reading_time: 5,
    },
    Template {
        topic: Topic::Science,
        title: "Decoding the Mysteries of Dark Matter and Dark Energy",
        excerpt: "The universe is made of mostly invisible stuff. Scientists are racing to understand dark matter and dark energy, the mysterious components that make up 95% of our cosmos.",
        content: r#"Look up at the night sky and you might think you're seeing the universe in all its glory. In reality, the stars, planets, and galaxies visible to us represent less than 5% of what actually exists. The rest is composed of two enigmatic substances: dark matter and dark energy.

## The Invisible Universe

Dark matter was first proposed in the 1930s when astronomer Fritz Zwicky noticed that galaxies in clusters were moving too fast to be held together by visible matter alone. Something unseen was providing extra gravitational pull.

Since then, evidence for dark matter has only grown stronger. We can see its gravitational effects bending light from distant galaxies, influencing the rotation of spiral galaxies, and shaping the large-scale structure of the cosmos.

## The Accelerating Cosmos

Dark energy presents an even deeper mystery. Discovered in 1998 through observations of distant supernovae, dark energy appears to be driving the accelerated expansion of the universe.

> We have discovered that approximately 68% of the universe is dark energy, 27% is dark matter, and only 5% is the ordinary matter that makes up everything we can see.

This means the universe is not only expanding but expanding faster over time. The implications are profound, suggesting the universe's ultimate fate may be a cold, dark emptiness as galaxies drift forever apart.

## The Search Continues

Scientists are pursuing multiple approaches to understand these cosmic mysteries. Underground detectors search for dark matter particles passing through Earth. Space telescopes map the distribution of dark matter through gravitational lensing. Particle accelerators attempt to create dark matter in the laboratory.

Each discovery brings us closer to understanding the true nature of our universe, even as new questions emerge about the fundamental forces shaping reality."#,
        reading_time: 6,
    },
    Template {
        topic: Topic::Innovation,
        title: "How Artificial Intelligence is Transforming Healthcare",
        excerpt: "From early disease detection to personalized treatment plans, AI is revolutionizing medicine. Explore how machine learning algorithms are helping doctors save lives and improve patient outcomes.",
        content: r#"The intersection of artificial intelligence and healthcare represents one of the most promising frontiers in modern medicine. AI systems are already assisting doctors in diagnosing diseases, developing treatments, and managing patient care with unprecedented precision.

## Diagnostic Breakthroughs

Machine learning algorithms can now analyze medical images with accuracy that matches or exceeds human experts. In radiology, AI systems detect tumors, fractures, and other abnormalities in X-rays, CT scans, and MRIs. Dermatology AI can identify skin cancers from photographs with remarkable precision.

These tools don't replace physicians but augment their capabilities. A radiologist reviewing hundreds of scans per day can use AI as a second pair of eyes, catching subtle findings that might otherwise be missed.

## Personalized Medicine

Perhaps the most transformative application of AI in healthcare is personalized medicine. By analyzing vast datasets of genetic information, medical histories, and treatment outcomes, AI can help identify which treatments are most likely to work for individual patients.

> AI-powered precision medicine has the potential to transform how we treat diseases, moving from a one-size-fits-all approach to tailored therapies based on each patient's unique biology.

This approach is already yielding results in oncology, where AI helps match cancer patients with targeted therapies based on the genetic profile of their tumors.

## Drug Discovery Acceleration

The traditional drug development process takes over a decade and costs billions of dollars. AI is dramatically accelerating this timeline. Machine learning models can predict how different molecules will interact with biological targets, identifying promising drug candidates in a fraction of the time.

## Challenges Ahead

Despite its promise, AI in healthcare faces significant challenges. Data privacy concerns, algorithmic bias, and the need for rigorous validation before clinical deployment require careful consideration. The goal is not to replace the human connection in medicine but to give healthcare providers better tools to serve their patients."#,
        reading_time: 5,
    },
    Template {
        topic: Topic::Environment,
        title: "Renewable Energy Revolution: The Path to a Sustainable Future",
        excerpt: "The global transition to renewable energy is accelerating faster than anyone predicted. Solar, wind, and battery technologies are reshaping our energy landscape and offering hope for addressing climate change.",
        content: r#"The world is in the midst of an energy transformation unlike anything since the industrial revolution. Renewable energy sources, once dismissed as impractical alternatives, are now the cheapest forms of electricity generation in most parts of the world.

## The Solar Surge

Solar photovoltaic technology has experienced a remarkable cost decline, dropping more than 90% since 2010. What was once an expensive novelty is now economically competitive with fossil fuels in many markets. Global solar capacity has grown exponentially, with installations doubling roughly every two years.

This growth is driven not just by environmental concerns but by pure economics. Solar panels produce electricity at lower costs than new coal or natural gas plants in most locations worldwide.

## Wind Power Comes of Age

Wind energy has experienced similar dramatic improvements. Modern wind turbines are engineering marvels, with the largest offshore installations now reaching heights taller than the Eiffel Tower. Offshore wind farms can now produce electricity at costs competitive with traditional power plants.

> The combination of solar and wind with battery storage is creating a new paradigm for clean, reliable electricity generation that was unimaginable just a decade ago.

## The Storage Solution

The intermittent nature of solar and wind has long been cited as their Achilles heel. But battery storage technology is solving this challenge. Lithium-ion battery costs have fallen dramatically, enabling grid-scale storage that can bank renewable energy for use when the sun isn't shining and the wind isn't blowing.

## Economic Transformation

This energy transition is creating new economic opportunities while disrupting traditional energy sectors. Millions of jobs are being created in renewable energy industries, often in regions previously dependent on fossil fuel extraction.

The path forward isn't without challenges, including the need for grid modernization and addressing the mining of battery materials. But the momentum toward a renewable energy future appears unstoppable."#,
        reading_time: 6,
    },
    Template {
        topic: Topic::Philosophy,
        title: "The Ethics of Artificial General Intelligence: Preparing for Tomorrow",
        excerpt: "As AI systems grow more capable, profound ethical questions emerge. How should we approach the development of artificial general intelligence, and what responsibilities do we have to future generations?",
        content: r#"The rapid advancement of artificial intelligence raises fundamental questions about consciousness, agency, and what it means to be human. As we move closer to the possibility of artificial general intelligence, society must grapple with ethical considerations that will shape our collective future.

## Defining the Challenge

Artificial general intelligence refers to AI systems capable of matching or exceeding human cognitive abilities across virtually all domains. While current AI excels at specific tasks, AGI would possess flexible, general-purpose intelligence applicable to any problem.

The implications of creating such systems are profound. An AGI might surpass human intelligence entirely, raising questions about control, safety, and the very structure of human civilization.

## The Alignment Problem

At the heart of AGI ethics is the alignment problem: how do we ensure that superintelligent systems pursue goals compatible with human values and flourishing? This is not merely a technical challenge but a philosophical one requiring us to articulate what we truly value.

> We are at a unique moment in history where the decisions we make about AI development could determine the long-term trajectory of human civilization.

Different cultures and individuals hold diverse and sometimes conflicting values. Whose values should guide AGI behavior? How do we account for values that might evolve over time?

## Responsibility to Future Generations

The development of AGI represents a decision whose consequences will extend far beyond our lifetimes. This raises questions of intergenerational ethics. Do we have obligations to future humans who have no voice in today's decisions but will live with their consequences?

## A Path Forward

Navigating these challenges requires unprecedented global cooperation between technologists, ethicists, policymakers, and the broader public. Transparency in AI development, international governance frameworks, and investment in safety research are essential steps.

The goal is not to halt progress but to ensure that transformative AI technologies benefit humanity broadly while minimizing existential risks. The choices we make today will echo through generations."#,
        reading_time: 7,
    },
];
