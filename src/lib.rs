pub mod configuration;

pub mod explorer {
    pub mod parameterrange;
    pub mod parameterset;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod nanpropagation;
    pub mod samplegrid;
}

pub mod membership {
    pub mod membershipfunctiontype;
    pub mod membershipfunction;
    pub mod curveresult;
    pub mod triangular;
    pub mod gaussian;
    pub mod trapezoidal;
    pub mod bell;
    pub mod sigmoidal;
    pub mod membershipfunctionmanager;
}
