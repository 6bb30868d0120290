pub mod configuration;

pub mod evaluation {
    pub mod evaluationrecord;
    pub mod batchevaluation;
}

pub mod function {
    pub mod fractionalfunction;
    pub mod linearfractionalfunction;
    pub mod quadraticfractionalfunction;
    pub mod fractionalform;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}
