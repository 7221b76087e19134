// Application layer: the tour chapters, each a Section writing into a Transcript.

pub mod sections;
